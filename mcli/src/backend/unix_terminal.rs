// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr tcgetwinsize isatty winsize

//! Unix/Linux/macOS backend using rustix's safe termios, poll, and read APIs.
//!
//! Input bytes are read straight from the file descriptor with [`rustix::io::read`].
//! [`std::io::Stdin`] is never used for reading, since its internal buffer would hide
//! queued bytes from [`poll()`].
//!
//! [`poll()`]: rustix::event::poll

use super::TerminalBackend;
use crate::{RawByteSource, TerminalSize};
use rustix::{event::{PollFd, PollFlags, Timespec},
             fd::{AsFd, BorrowedFd},
             io::Errno,
             termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios}};
use std::{fs::File, io};

/// Zero timeout: check readiness and return immediately.
const NO_WAIT: Timespec = Timespec {
    tv_sec: 0,
    tv_nsec: 0,
};

/// Represents stdin, stdout, or an explicitly opened terminal device.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
#[derive(Debug)]
enum TerminalFd {
    Stdin(io::Stdin),
    Stdout(io::Stdout),
    Tty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::Stdout(stdout) => stdout.as_fd(),
            TerminalFd::Tty(file) => file.as_fd(),
        }
    }
}

/// Termios backed terminal.
#[derive(Debug)]
pub struct UnixTerminal {
    input: TerminalFd,
    output: TerminalFd,
}

impl UnixTerminal {
    /// Input from stdin if it is a tty, otherwise from `/dev/tty` (eg: `echo "data" |
    /// your_app`). If `/dev/tty` can't be opened either, stdin is used as is, and raw
    /// mode will fail with an attribute error. Output (for the size query) is stdout.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let input = if termios::isatty(&stdin) {
            TerminalFd::Stdin(stdin)
        } else {
            match File::options().read(true).write(true).open("/dev/tty") {
                Ok(file) => TerminalFd::Tty(file),
                Err(error) => {
                    tracing::debug!(
                        message = "stdin is not a tty and /dev/tty is unavailable",
                        error = ?error
                    );
                    TerminalFd::Stdin(stdin)
                }
            }
        };
        Self {
            input,
            output: TerminalFd::Stdout(io::stdout()),
        }
    }

    /// Bind both input and output to an already open terminal device, eg: the slave
    /// side of a pseudo terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file handle can't be duplicated.
    pub fn from_file(file: File) -> io::Result<Self> {
        let output = file.try_clone()?;
        Ok(Self {
            input: TerminalFd::Tty(file),
            output: TerminalFd::Tty(output),
        })
    }

    /// Size of the terminal attached to stdout. Unlike [`Self::stdio()`] this never
    /// touches stdin or opens `/dev/tty`.
    ///
    /// # Errors
    ///
    /// If stdout is not a terminal.
    pub fn query_stdout_size() -> io::Result<TerminalSize> {
        winsize_of(io::stdout())
    }

    /// Returns the readiness flags of the input fd. Empty when `timeout` expired.
    /// `None` waits forever.
    fn wait_for_input(&self, timeout: Option<&Timespec>) -> io::Result<PollFlags> {
        let mut poll_fds = [PollFd::new(&self.input, PollFlags::IN)];
        loop {
            match rustix::event::poll(&mut poll_fds, timeout) {
                Ok(0) => return Ok(PollFlags::empty()),
                Ok(_) => return Ok(poll_fds[0].revents()),
                Err(Errno::INTR) => {}
                Err(errno) => return Err(errno.into()),
            }
        }
    }
}

impl RawByteSource for UnixTerminal {
    fn poll(&mut self) -> bool {
        self.wait_for_input(Some(&NO_WAIT))
            .is_ok_and(|revents| revents.contains(PollFlags::IN))
    }

    fn read_blocking(&mut self) -> Option<u8> {
        let mut buffer = [0_u8; 1];
        loop {
            // With VMIN=0 a bare read() returns immediately, so wait for readiness
            // first. HUP also wakes us up, and the read below then reports EOF.
            if let Err(error) = self.wait_for_input(None) {
                tracing::debug!(message = "poll on terminal input failed", error = ?error);
                return None;
            }
            match rustix::io::read(&self.input, &mut buffer[..]) {
                Ok(0) => return None,
                Ok(_) => return Some(buffer[0]),
                Err(Errno::INTR | Errno::AGAIN) => {}
                Err(errno) => {
                    tracing::debug!(message = "read on terminal input failed", error = ?errno);
                    return None;
                }
            }
        }
    }
}

impl TerminalBackend for UnixTerminal {
    type Mode = Termios;

    fn get_attributes(&mut self) -> io::Result<Termios> {
        Ok(termios::tcgetattr(&self.input)?)
    }

    fn set_attributes(&mut self, mode: &Termios) -> io::Result<()> {
        Ok(termios::tcsetattr(&self.input, OptionalActions::Now, mode)?)
    }

    /// Clears `ECHO` and `ICANON` only. Signal generation (`ISIG`) and output
    /// processing (`OPOST`) stay on, so Ctrl+C still interrupts and `\n` still moves to
    /// the start of the next line.
    fn make_raw(mode: &Termios) -> Termios {
        let mut raw = mode.clone();
        raw.local_modes.remove(LocalModes::ECHO | LocalModes::ICANON);
        raw.special_codes[SpecialCodeIndex::VMIN] = 0;
        raw.special_codes[SpecialCodeIndex::VTIME] = 0;
        raw
    }

    fn query_size(&self) -> io::Result<TerminalSize> { winsize_of(&self.output) }
}

fn winsize_of(fd: impl AsFd) -> io::Result<TerminalSize> {
    let winsize = termios::tcgetwinsize(fd)?;
    Ok(TerminalSize {
        rows: winsize.ws_row,
        cols: winsize.ws_col,
    })
}
