// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One-byte-at-a-time access to the terminal's input stream.
///
/// This is the leaf the [`KeyDecoder`] drives. Implementations wrap the platform's
/// character input primitive: `poll()` + `read()` on a termios file descriptor for
/// Unix, `_kbhit()` + `_getch()` for the Windows console, or a scripted queue in
/// tests.
///
/// None of these methods return errors. A stream that has been closed (EOF) or that
/// fails to read yields `None`, which the decoder turns into [`KeyEvent::NoKey`].
///
/// [`KeyDecoder`]: super::KeyDecoder
/// [`KeyEvent::NoKey`]: super::KeyEvent::NoKey
pub trait RawByteSource {
    /// Non-blocking. Returns `true` iff at least one byte is currently queued. Must not
    /// consume the byte.
    fn poll(&mut self) -> bool;

    /// Suspends the calling thread until one byte is available, then returns it.
    /// Returns `None` if the stream is closed.
    fn read_blocking(&mut self) -> Option<u8>;

    /// [`Self::poll`] followed by [`Self::read_blocking`], without ever waiting.
    fn read_nonblocking(&mut self) -> Option<u8> {
        if self.poll() { self.read_blocking() } else { None }
    }

    /// Does `byte` introduce a legacy `prefix + scan code` extended key? VT100 streams
    /// have no such prefix.
    fn is_extended_prefix(&self, _byte: u8) -> bool { false }

    /// Map the scan code following an extended prefix to a logical key.
    fn decode_extended_prefix(&self, _prefix: u8, _scan_code: u8) -> Option<super::ExtendedKey> {
        None
    }
}

impl<S: RawByteSource + ?Sized> RawByteSource for &mut S {
    fn poll(&mut self) -> bool { (**self).poll() }

    fn read_blocking(&mut self) -> Option<u8> { (**self).read_blocking() }

    fn read_nonblocking(&mut self) -> Option<u8> { (**self).read_nonblocking() }

    fn is_extended_prefix(&self, byte: u8) -> bool { (**self).is_extended_prefix(byte) }

    fn decode_extended_prefix(&self, prefix: u8, scan_code: u8) -> Option<super::ExtendedKey> {
        (**self).decode_extended_prefix(prefix, scan_code)
    }
}
