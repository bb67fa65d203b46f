// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode lifecycle.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode** (as set up here):
//! - No line buffering, bytes are available immediately
//! - No echo, typed characters don't automatically appear
//! - Reads return immediately, even with zero bytes queued
//!
//! Signal keys (Ctrl+C) and output post-processing are left as they were. This is a
//! narrower change than `stty raw` (or `cfmakeraw()`), which also turns those off.
//!
//! ## `stty` equivalent
//!
//! ```bash
//! old_stty=$(stty -g)
//! stty -echo -icanon min 0 time 0
//! # ... read keys ...
//! stty "$old_stty"
//! ```
//!
//! ## Session ownership
//!
//! The original terminal attributes are not kept in a global. [`RawModeSession`] is an
//! owned snapshot: it is created by [`RawModeSession::begin()`], which captures the
//! attributes and applies raw mode, and it is consumed by [`RawModeSession::end()`],
//! which writes the snapshot back. Holding a session is the only way to be in raw
//! mode, and the only way to restore it.
//!
//! [`Terminal`] holds at most one session, which gives the "enable twice does not
//! re-snapshot" and "disable twice is a no-op" semantics.
//!
//! ## Usage Example
//!
//! The recommended way to use raw mode is with the [`RawModeGuard`]:
//!
//! ```no_run
//! use mcli::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! {
//!     let mut guard = terminal.raw_mode_guard()?;
//!     let key = guard.read_key(true);
//!     // ...
//! } // Raw mode automatically disabled when guard is dropped
//! # Ok::<(), mcli::TermError>(())
//! ```
//!
//! Alternatively, you can manually control raw mode:
//!
//! ```no_run
//! use mcli::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! terminal.enable_raw_mode()?;
//! // ... process input ...
//! terminal.disable_raw_mode()?;
//! # Ok::<(), mcli::TermError>(())
//! ```
//!
//! [`Terminal`]: crate::Terminal

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod raw_mode_guard;
mod raw_mode_session;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_guard::*;
pub use raw_mode_session::*;
