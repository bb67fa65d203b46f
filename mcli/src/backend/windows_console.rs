// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words kbhit getch conio winapi processenv wincon consoleapi

//! Windows console backend.
//!
//! Input modes are switched with `GetConsoleMode` / `SetConsoleMode`. Keys are read with
//! the C runtime's `_kbhit()` / `_getch()`, which report navigation and function keys
//! as a `0x00` or `0xE0` prefix followed by a scan code.

use super::TerminalBackend;
use crate::{RawByteSource, TerminalSize, decode_scan_code, is_scan_code_prefix};
use std::{io, os::raw::c_int};
use winapi::{shared::minwindef::DWORD,
             um::{consoleapi::{GetConsoleMode, SetConsoleMode},
                  handleapi::INVALID_HANDLE_VALUE,
                  processenv::GetStdHandle,
                  winbase::{STD_INPUT_HANDLE, STD_OUTPUT_HANDLE},
                  wincon::{ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT,
                           ENABLE_VIRTUAL_TERMINAL_PROCESSING},
                  winnt::HANDLE}};

unsafe extern "C" {
    fn _kbhit() -> c_int;
    fn _getch() -> c_int;
}

/// Console input mode flags, as returned by `GetConsoleMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleMode {
    pub input: DWORD,
}

/// The process's attached console. Handles are looked up on every call, so the value
/// holds no OS resources.
#[derive(Debug, Default)]
pub struct WindowsConsole {
    _private: (),
}

impl WindowsConsole {
    #[must_use]
    pub fn stdio() -> Self { Self::default() }

    /// Size of the console attached to stdout.
    ///
    /// # Errors
    ///
    /// If there is no console.
    pub fn query_stdout_size() -> io::Result<TerminalSize> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(TerminalSize { rows, cols })
    }
}

fn std_handle(which: DWORD) -> io::Result<HANDLE> {
    // SAFETY: GetStdHandle has no preconditions.
    let handle = unsafe { GetStdHandle(which) };
    if handle.is_null() || handle == INVALID_HANDLE_VALUE {
        return Err(io::Error::last_os_error());
    }
    Ok(handle)
}

fn get_console_mode(handle: HANDLE) -> io::Result<DWORD> {
    let mut mode: DWORD = 0;
    // SAFETY: handle came from GetStdHandle and mode is a valid out pointer.
    if unsafe { GetConsoleMode(handle, &raw mut mode) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(mode)
}

fn set_console_mode(handle: HANDLE, mode: DWORD) -> io::Result<()> {
    // SAFETY: handle came from GetStdHandle.
    if unsafe { SetConsoleMode(handle, mode) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

impl RawByteSource for WindowsConsole {
    fn poll(&mut self) -> bool {
        // SAFETY: CRT function with no preconditions.
        unsafe { _kbhit() != 0 }
    }

    fn read_blocking(&mut self) -> Option<u8> {
        // SAFETY: CRT function with no preconditions.
        let ch = unsafe { _getch() };
        u8::try_from(ch).ok()
    }

    fn is_extended_prefix(&self, byte: u8) -> bool { is_scan_code_prefix(byte) }

    fn decode_extended_prefix(
        &self,
        prefix: u8,
        scan_code: u8,
    ) -> Option<crate::ExtendedKey> {
        decode_scan_code(prefix, scan_code)
    }
}

impl TerminalBackend for WindowsConsole {
    type Mode = ConsoleMode;

    fn get_attributes(&mut self) -> io::Result<ConsoleMode> {
        let input = get_console_mode(std_handle(STD_INPUT_HANDLE)?)?;
        Ok(ConsoleMode { input })
    }

    fn set_attributes(&mut self, mode: &ConsoleMode) -> io::Result<()> {
        set_console_mode(std_handle(STD_INPUT_HANDLE)?, mode.input)
    }

    fn make_raw(mode: &ConsoleMode) -> ConsoleMode {
        ConsoleMode {
            input: mode.input & !(ENABLE_ECHO_INPUT | ENABLE_LINE_INPUT),
        }
    }

    fn query_size(&self) -> io::Result<TerminalSize> { Self::query_stdout_size() }

    fn enable_control_codes(&mut self) -> io::Result<()> {
        let handle = std_handle(STD_OUTPUT_HANDLE)?;
        let mode = get_console_mode(handle)?;
        set_console_mode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING)
    }
}
