// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExtendedKey, RawByteSource, TerminalBackend, TerminalSize, decode_scan_code,
            is_scan_code_prefix};
use std::{collections::VecDeque,
          io,
          sync::{Arc, Mutex}};

/// Attribute snapshot of the scripted terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockMode {
    pub echo: bool,
    pub line_buffered: bool,
    pub min_bytes: u8,
}

impl MockMode {
    pub fn cooked() -> Self {
        Self {
            echo: true,
            line_buffered: true,
            min_bytes: 1,
        }
    }

    pub fn raw() -> Self {
        Self {
            echo: false,
            line_buffered: false,
            min_bytes: 0,
        }
    }
}

/// Shared view of a [`MockTerminal`]'s current mode, still readable after the terminal
/// has been moved into (and dropped with) a [`crate::Terminal`].
#[derive(Debug, Clone)]
pub struct ModeProbe {
    mode: Arc<Mutex<MockMode>>,
}

impl ModeProbe {
    pub fn current(&self) -> MockMode { *self.mode.lock().unwrap() }
}

/// Scripted [`TerminalBackend`].
///
/// Input is a list of chunks. [`RawByteSource::poll()`] only sees bytes left in the
/// current chunk, while [`RawByteSource::read_blocking()`] moves on to the next chunk
/// when the current one is used up. This models bytes that arrive after a poll. When
/// every chunk is used up, `read_blocking()` reports a closed stream.
#[derive(Debug)]
pub struct MockTerminal {
    chunks: VecDeque<VecDeque<u8>>,
    read_count: usize,
    scan_code_prefixes: bool,
    mode: Arc<Mutex<MockMode>>,
    mode_history: Vec<MockMode>,
    get_count: usize,
    init_count: usize,
    fail_get: bool,
    fail_set: bool,
    fail_init: bool,
    size: Option<TerminalSize>,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self {
            chunks: VecDeque::new(),
            read_count: 0,
            scan_code_prefixes: false,
            mode: Arc::new(Mutex::new(MockMode::cooked())),
            mode_history: vec![],
            get_count: 0,
            init_count: 0,
            fail_get: false,
            fail_set: false,
            fail_init: false,
            size: Some(TerminalSize { rows: 24, cols: 80 }),
        }
    }
}

impl MockTerminal {
    /// No input queued, cooked mode, 80x24.
    pub fn new() -> Self { Self::default() }

    pub fn with_input(bytes: &[u8]) -> Self { Self::with_chunks(&[bytes]) }

    pub fn with_chunks(chunks: &[&[u8]]) -> Self {
        Self {
            chunks: chunks.iter().map(|it| it.iter().copied().collect()).collect(),
            ..Self::default()
        }
    }

    /// Treat `0x00` and `0xE0` as scan code prefixes, like the Windows console.
    pub fn with_scan_code_prefixes(mut self) -> Self {
        self.scan_code_prefixes = true;
        self
    }

    /// Attribute snapshots fail, like on a file or pipe.
    pub fn with_failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// `None` makes the size query fail.
    pub fn with_size(mut self, size: Option<TerminalSize>) -> Self {
        self.size = size;
        self
    }

    /// Make every following `set_attributes()` fail (or succeed again).
    pub fn fail_attribute_writes(&mut self, fail: bool) { self.fail_set = fail; }

    pub fn current_mode(&self) -> MockMode { *self.mode.lock().unwrap() }

    pub fn mode_probe(&self) -> ModeProbe {
        ModeProbe {
            mode: Arc::clone(&self.mode),
        }
    }

    /// Every mode successfully applied, in order.
    pub fn mode_history(&self) -> &[MockMode] { &self.mode_history }

    pub fn get_count(&self) -> usize { self.get_count }

    pub fn init_count(&self) -> usize { self.init_count }

    /// Number of `read_blocking()` calls, including ones on a closed stream.
    pub fn read_count(&self) -> usize { self.read_count }

    pub fn remaining_input(&self) -> usize { self.chunks.iter().map(VecDeque::len).sum() }
}

impl RawByteSource for MockTerminal {
    fn poll(&mut self) -> bool { self.chunks.front().is_some_and(|it| !it.is_empty()) }

    fn read_blocking(&mut self) -> Option<u8> {
        self.read_count += 1;
        loop {
            let chunk = self.chunks.front_mut()?;
            if let Some(byte) = chunk.pop_front() {
                return Some(byte);
            }
            self.chunks.pop_front();
        }
    }

    fn is_extended_prefix(&self, byte: u8) -> bool {
        self.scan_code_prefixes && is_scan_code_prefix(byte)
    }

    fn decode_extended_prefix(&self, prefix: u8, scan_code: u8) -> Option<ExtendedKey> {
        decode_scan_code(prefix, scan_code)
    }
}

impl TerminalBackend for MockTerminal {
    type Mode = MockMode;

    fn get_attributes(&mut self) -> io::Result<MockMode> {
        if self.fail_get {
            return Err(io::Error::from_raw_os_error(25)); // ENOTTY
        }
        self.get_count += 1;
        Ok(self.current_mode())
    }

    fn set_attributes(&mut self, mode: &MockMode) -> io::Result<()> {
        if self.fail_set {
            return Err(io::Error::other("scripted set_attributes failure"));
        }
        *self.mode.lock().unwrap() = *mode;
        self.mode_history.push(*mode);
        Ok(())
    }

    fn make_raw(_mode: &MockMode) -> MockMode { MockMode::raw() }

    fn query_size(&self) -> io::Result<TerminalSize> {
        self.size.ok_or_else(|| io::Error::other("not a terminal"))
    }

    fn enable_control_codes(&mut self) -> io::Result<()> {
        if self.fail_init {
            return Err(io::Error::other("no console handle"));
        }
        self.init_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_poll_only_sees_current_chunk() {
        let mut mock = MockTerminal::with_chunks(&[b"a", b"b"]);
        assert!(mock.poll());
        assert_eq!(mock.read_blocking(), Some(b'a'));
        assert!(!mock.poll());
        assert_eq!(mock.read_blocking(), Some(b'b'));
        assert_eq!(mock.read_blocking(), None);
        assert_eq!(mock.read_count(), 3);
    }
}
