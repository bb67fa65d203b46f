// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tests against a real pseudo terminal (Unix only). Each test opens its own PTY pair
//! and binds a [`crate::UnixTerminal`] to the slave side, so the process's own terminal
//! is never touched.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

mod test_pty_decode;
mod test_pty_raw_mode;
