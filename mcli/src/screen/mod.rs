// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen output: cursor movement, visibility, erase, bell, SGR styling constants, and
//! the terminal size query.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod control_codes;
mod screen_writer;
mod terminal_size;

// Public module. SGR constants are namespaced, eg: `sgr::FG_RED`.
pub mod sgr;

// Re-export the public API (flat, ergonomic surface).
pub use control_codes::*;
pub use screen_writer::*;
pub use terminal_size::*;
