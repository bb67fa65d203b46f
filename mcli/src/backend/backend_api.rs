// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RawByteSource, TerminalSize};
use std::io;

/// The capability interface that each OS family implements.
///
/// A backend is selected once at process start (see [`PlatformTerminal`]) and injected
/// into [`Terminal`]. Nothing above this trait uses conditional compilation, so the
/// decoding and lifecycle logic is identical on every platform and can be driven by a
/// scripted backend in tests.
///
/// The methods report plain [`io::Error`]s. The caller knows which step (snapshot,
/// apply, restore) was in flight and wraps them in the matching [`TermError`].
///
/// [`PlatformTerminal`]: super::PlatformTerminal
/// [`Terminal`]: crate::Terminal
/// [`TermError`]: crate::TermError
pub trait TerminalBackend: RawByteSource {
    /// Snapshot of the terminal attributes (`TerminalMode`). Restored verbatim when raw
    /// mode is disabled.
    type Mode: Clone;

    fn get_attributes(&mut self) -> io::Result<Self::Mode>;

    fn set_attributes(&mut self, mode: &Self::Mode) -> io::Result<()>;

    /// Derive the raw variant of `mode`: no echo, no line buffering, and reads that
    /// return immediately with zero required bytes.
    fn make_raw(mode: &Self::Mode) -> Self::Mode;

    fn query_size(&self) -> io::Result<TerminalSize>;

    /// Turn on control code interpretation for the output handle. A no-op where the
    /// terminal always interprets them.
    fn enable_control_codes(&mut self) -> io::Result<()> { Ok(()) }
}
