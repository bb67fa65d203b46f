// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles: a scripted terminal backend, a capturing writer, a real pseudo
//! terminal pair (Unix), and a self-deleting temp dir.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod mock_terminal;
#[cfg(unix)]
mod pty_pair;
mod stdout_mock;
mod temp_dir;

// Re-export the public API (flat, ergonomic surface).
pub use mock_terminal::*;
#[cfg(unix)]
pub use pty_pair::*;
pub use stdout_mock::*;
pub use temp_dir::*;
