// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words openpt grantpt unlockpt ptsname ptmx noctty winsize

use rustix::{event::{PollFd, PollFlags, Timespec},
             fd::OwnedFd,
             pty::{OpenptFlags, grantpt, openpt, ptsname, unlockpt},
             termios::{Winsize, tcsetwinsize}};
use std::{ffi::OsStr, fs::File, os::unix::ffi::OsStrExt as _};

/// A real pseudo terminal. The slave side behaves like the terminal a program runs in
/// and can be handed to [`crate::UnixTerminal::from_file()`]. Bytes written to the
/// master side arrive as keyboard input on the slave side.
#[derive(Debug)]
pub struct PtyPair {
    pub master: OwnedFd,
    pub slave: File,
}

impl PtyPair {
    /// # Errors
    ///
    /// Any failure opening `/dev/ptmx` or the slave device.
    pub fn open() -> std::io::Result<Self> {
        let master = openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY)?;
        grantpt(&master)?;
        unlockpt(&master)?;
        let slave_name = ptsname(&master, Vec::new())?;
        let slave = File::options()
            .read(true)
            .write(true)
            .open(OsStr::from_bytes(slave_name.as_bytes()))?;
        Ok(Self { master, slave })
    }

    /// Sandboxed CI runners may not offer pseudo terminals. Tests bail out quietly there.
    pub fn open_or_skip() -> Option<Self> {
        match Self::open() {
            Ok(pty) => Some(pty),
            Err(err) => {
                eprintln!("⚠️  Skipping PTY test, can't open a pseudo terminal: {err}");
                None
            }
        }
    }

    pub fn write_to_master(&mut self, bytes: &[u8]) {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            let written = rustix::io::write(&self.master, remaining).unwrap();
            remaining = &remaining[written..];
        }
    }

    /// Block (up to a few seconds) until the slave side has input queued.
    pub fn wait_until_readable(&self) {
        let mut poll_fds = [PollFd::new(&self.slave, PollFlags::IN)];
        let timeout = Timespec {
            tv_sec: 5,
            tv_nsec: 0,
        };
        let ready = rustix::event::poll(&mut poll_fds, Some(&timeout)).unwrap();
        assert_eq!(ready, 1, "slave side never became readable");
    }

    pub fn set_window_size(&self, rows: u16, cols: u16) {
        let winsize = Winsize {
            ws_row: rows,
            ws_col: cols,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        tcsetwinsize(&self.master, winsize).unwrap();
    }
}
