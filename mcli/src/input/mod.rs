// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard input: bytes in, logical keys out.
//!
//! ```text
//! Raw terminal input (stdin / console)
//!    │
//! ┌──▼──────────────────────────────┐
//! │  RawByteSource                  │  poll(), read_blocking(), read_nonblocking()
//! └──┬──────────────────────────────┘
//!    │ one byte at a time
//! ┌──▼──────────────────────────────┐
//! │  KeyDecoder (FSM)               │  CsiKeyTable, legacy scan code table
//! └──┬──────────────────────────────┘
//!    ▼
//! KeyEvent (Ascii, Escape, Extended, NoKey)
//! ```
//!
//! Paste bracketing and non-VT100 terminals are not supported.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod byte_source;
mod csi_key_table;
mod key_decoder;
mod key_event;
mod scan_codes;

// Re-export the public API (flat, ergonomic surface).
pub use byte_source::*;
pub use csi_key_table::*;
pub use key_decoder::*;
pub use key_event::*;
pub use scan_codes::*;
