// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AttributeOperation, TermError, TermResult, TerminalBackend};

/// Owned snapshot of the terminal attributes taken just before raw mode was applied.
///
/// See the [module documentation] for the lifecycle.
///
/// [module documentation]: mod@crate::raw_mode
#[derive(Debug)]
#[must_use = "dropping a session without ending it leaves the terminal in raw mode"]
pub struct RawModeSession<M> {
    original: M,
}

impl<M: Clone> RawModeSession<M> {
    /// Snapshot the current attributes, then apply their raw variant.
    ///
    /// # Errors
    ///
    /// [`TermError::Attribute`] with [`AttributeOperation::Get`] if the snapshot fails
    /// (eg: input is not a terminal), or [`AttributeOperation::Set`] if raw mode can't
    /// be applied. In both cases the terminal is left unchanged.
    pub fn begin<B>(backend: &mut B) -> TermResult<Self>
    where
        B: TerminalBackend<Mode = M>,
    {
        let original = backend
            .get_attributes()
            .map_err(|err| TermError::attribute(AttributeOperation::Get, err))?;

        backend
            .set_attributes(&B::make_raw(&original))
            .map_err(|err| TermError::attribute(AttributeOperation::Set, err))?;

        tracing::debug!(message = "raw mode enabled");
        Ok(Self { original })
    }

    /// Write the snapshot back without giving up the session, so a failed restore can
    /// be retried.
    ///
    /// # Errors
    ///
    /// [`TermError::Attribute`] with [`AttributeOperation::Restore`].
    pub fn restore<B>(&self, backend: &mut B) -> TermResult<()>
    where
        B: TerminalBackend<Mode = M>,
    {
        backend
            .set_attributes(&self.original)
            .map_err(|err| TermError::attribute(AttributeOperation::Restore, err))?;
        tracing::debug!(message = "raw mode disabled, original attributes restored");
        Ok(())
    }

    /// Restore the snapshot and end the session.
    ///
    /// # Errors
    ///
    /// See [`Self::restore()`].
    pub fn end<B>(self, backend: &mut B) -> TermResult<()>
    where
        B: TerminalBackend<Mode = M>,
    {
        self.restore(backend)
    }

    pub fn original_mode(&self) -> &M { &self.original }
}
