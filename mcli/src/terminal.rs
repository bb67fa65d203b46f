// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process-facing facade: one value that owns the backend, the raw mode session,
//! and the key decoder.
//!
//! ```text
//! initialize() ─▶ enable_raw_mode() ─▶ read_key() … read_key() ─▶ cleanup()
//!                        │                                           │
//!                        └── RawModeSession::begin      RawModeSession::end
//! ```
//!
//! If the caller forgets `cleanup()`, dropping the [`Terminal`] restores the original
//! mode anyway.

use crate::{KeyDecoder, KeyEvent, PlatformTerminal, RawModeGuard, RawModeSession,
            TermError, TermResult, TerminalBackend, TerminalSize};
use std::fmt::{Debug, Formatter};

pub struct Terminal<B: TerminalBackend> {
    backend: B,
    decoder: KeyDecoder,
    session: Option<RawModeSession<B::Mode>>,
}

impl Terminal<PlatformTerminal> {
    /// Facade over the process's own terminal.
    #[must_use]
    pub fn stdio() -> Self { Self::new(PlatformTerminal::stdio()) }
}

impl<B: TerminalBackend> Terminal<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            decoder: KeyDecoder::default(),
            session: None,
        }
    }

    /// Replace the default (VT100) decoder, eg: with
    /// `KeyDecoder::with_table(CsiKeyTable::xterm())`.
    #[must_use]
    pub fn with_decoder(mut self, decoder: KeyDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Enable control code interpretation on the output handle, where the platform needs
    /// it (Windows console). A no-op success elsewhere.
    ///
    /// # Errors
    ///
    /// [`TermError::Init`] if the output handle can't be retrieved or configured.
    pub fn initialize(&mut self) -> TermResult<()> {
        self.backend
            .enable_control_codes()
            .map_err(TermError::init)?;
        tracing::debug!(message = "terminal initialized");
        Ok(())
    }

    /// Enter raw mode. Calling this while already in raw mode is a no-op, and keeps the
    /// attributes captured by the first call.
    ///
    /// # Errors
    ///
    /// [`TermError::Attribute`] if the attributes can't be read or applied.
    pub fn enable_raw_mode(&mut self) -> TermResult<()> {
        if self.session.is_some() {
            tracing::debug!(message = "raw mode already enabled, skipping");
            return Ok(());
        }
        self.session = Some(RawModeSession::begin(&mut self.backend)?);
        Ok(())
    }

    /// Leave raw mode and restore the captured attributes. A no-op when raw mode isn't
    /// active. On failure raw mode stays active, so the call can be retried.
    ///
    /// # Errors
    ///
    /// [`TermError::Attribute`] if the original attributes can't be written back.
    pub fn disable_raw_mode(&mut self) -> TermResult<()> {
        let Some(session) = &self.session else {
            tracing::debug!(message = "raw mode not enabled, skipping disable");
            return Ok(());
        };
        session.restore(&mut self.backend)?;
        self.session = None;
        Ok(())
    }

    pub fn is_raw_mode(&self) -> bool { self.session.is_some() }

    /// Enable raw mode for the lifetime of the returned guard.
    ///
    /// # Errors
    ///
    /// See [`Self::enable_raw_mode()`].
    pub fn raw_mode_guard(&mut self) -> TermResult<RawModeGuard<'_, B>> {
        self.enable_raw_mode()?;
        Ok(RawModeGuard::new(self))
    }

    /// Decode one key. With `blocking == false` this returns [`KeyEvent::NoKey`]
    /// immediately when nothing is queued.
    pub fn read_key(&mut self, blocking: bool) -> KeyEvent {
        self.decoder.decode(&mut self.backend, blocking)
    }

    /// # Errors
    ///
    /// [`TermError::QuerySize`] if the output is not a terminal.
    pub fn query_size(&self) -> TermResult<TerminalSize> {
        self.backend.query_size().map_err(TermError::query_size)
    }

    /// Restore the terminal if raw mode is still active.
    ///
    /// # Errors
    ///
    /// [`TermError::Attribute`] if the restore fails.
    pub fn cleanup(&mut self) -> TermResult<()> {
        self.disable_raw_mode()?;
        tracing::debug!(message = "terminal cleaned up");
        Ok(())
    }

    pub fn decoder(&self) -> KeyDecoder { self.decoder }

    pub fn backend(&self) -> &B { &self.backend }

    pub fn backend_mut(&mut self) -> &mut B { &mut self.backend }
}

impl<B: TerminalBackend + Debug> Debug for Terminal<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("backend", &self.backend)
            .field("decoder", &self.decoder)
            .field("raw_mode", &self.is_raw_mode())
            .finish()
    }
}

impl<B: TerminalBackend> Drop for Terminal<B> {
    fn drop(&mut self) {
        if let Some(session) = self.session.take()
            && let Err(error) = session.end(&mut self.backend)
        {
            tracing::warn!(
                message = "failed to restore terminal on drop",
                error = ?error
            );
        }
    }
}
