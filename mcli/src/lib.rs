// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios conio kbhit getch

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # mcli
//!
//! A minimal cross-platform terminal layer. It does five things:
//!
//! 1. Puts the terminal into raw mode (no echo, no line buffering) and reliably
//!    restores it.
//! 2. Polls for input without blocking.
//! 3. Decodes VT100 escape sequences (and legacy Windows console scan codes) into
//!    logical keys.
//! 4. Emits cursor, erase, and SGR style control codes.
//! 5. Reports the terminal size.
//!
//! It is not a terminal emulator, it keeps no input history, and it does not support
//! paste bracketing or non-VT100 terminals.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── Terminal<B> ─────────────────────────────┐
//! │  initialize() / cleanup() / Drop                                     │
//! │  enable_raw_mode() ──▶ RawModeSession<B::Mode> (owned snapshot)      │
//! │  read_key()        ──▶ KeyDecoder (FSM + CsiKeyTable)                │
//! │  query_size()                                                        │
//! └──────────────────────────────┬───────────────────────────────────────┘
//!                                │ B: TerminalBackend (+ RawByteSource)
//!               ┌────────────────┴─────────────────┐
//!         UnixTerminal                      WindowsConsole
//!   termios, poll(), read()          console modes, _kbhit(), _getch()
//!
//! Screen<W: Write>: stateless control code emitter, flushes every call
//! ```
//!
//! Everything above [`TerminalBackend`] is platform independent. The backend is chosen
//! at build time as [`PlatformTerminal`], and tests drive the same code with a scripted
//! backend.
//!
//! # Example
//!
//! ```no_run
//! use mcli::{KeyEvent, Screen, Terminal};
//!
//! fn main() -> miette::Result<()> {
//!     let mut terminal = Terminal::stdio();
//!     let mut screen = Screen::stdout();
//!     terminal.initialize()?;
//!     terminal.enable_raw_mode()?;
//!
//!     loop {
//!         match terminal.read_key(false) {
//!             KeyEvent::NoKey => std::thread::sleep(std::time::Duration::from_millis(10)),
//!             KeyEvent::Escape => break,
//!             key if key.is_enter() => screen.ring_bell().map_err(miette::Report::msg)?,
//!             key => println!("{key:?}"),
//!         }
//!     }
//!
//!     terminal.cleanup()?;
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! Events are emitted with [`tracing`] and go nowhere until a subscriber is installed,
//! eg: with [`try_initialize_logging_global()`] and [`TracingConfig::from_env()`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod backend;
pub mod error;
pub mod input;
pub mod log;
pub mod raw_mode;
pub mod screen;
pub mod terminal;

#[cfg(test)]
mod test_fixtures;

#[cfg(all(unix, test))]
mod integration_tests;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use backend::*;
pub use error::*;
pub use input::*;
pub use log::*;
pub use raw_mode::*;
pub use screen::*;
pub use terminal::*;
