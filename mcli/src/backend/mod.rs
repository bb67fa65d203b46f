// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform backends. Exactly one of them is compiled in, and exported as
//! [`PlatformTerminal`].
//!
//! | Backend           | Raw mode                    | Input                    | Extended keys      |
//! | :---------------- | :-------------------------- | :----------------------- | :----------------- |
//! | `UnixTerminal`    | termios `ECHO`, `ICANON`    | `poll()` + `read()`      | CSI sequences      |
//! | `WindowsConsole`  | `ENABLE_ECHO_INPUT`, `LINE` | `_kbhit()` + `_getch()`  | `0x00`/`0xE0` + scan code |

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod backend_api;
#[cfg(unix)]
mod unix_terminal;
#[cfg(windows)]
mod windows_console;

// Re-export the public API (flat, ergonomic surface).
pub use backend_api::*;
#[cfg(unix)]
pub use unix_terminal::*;
#[cfg(windows)]
pub use windows_console::*;

#[cfg(unix)]
pub type PlatformTerminal = UnixTerminal;
#[cfg(windows)]
pub type PlatformTerminal = WindowsConsole;
