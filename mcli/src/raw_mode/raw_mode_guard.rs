// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Terminal, TerminalBackend};
use std::ops::{Deref, DerefMut};

/// RAII guard that automatically disables raw mode when dropped.
///
/// Created by [`Terminal::raw_mode_guard()`]. Dereferences to the [`Terminal`], so keys
/// can be read while the guard is alive. Raw mode is restored on every exit path out of
/// the guard's scope, including `?` and unwinding panics.
///
/// A restore failure in `drop` can't be returned, so it is logged with
/// `tracing::warn!`. Call [`Terminal::disable_raw_mode()`] explicitly to observe it.
#[derive(Debug)]
pub struct RawModeGuard<'a, B: TerminalBackend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: TerminalBackend> RawModeGuard<'a, B> {
    pub(crate) fn new(terminal: &'a mut Terminal<B>) -> Self { Self { terminal } }
}

impl<B: TerminalBackend> Deref for RawModeGuard<'_, B> {
    type Target = Terminal<B>;

    fn deref(&self) -> &Self::Target { self.terminal }
}

impl<B: TerminalBackend> DerefMut for RawModeGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.terminal }
}

impl<B: TerminalBackend> Drop for RawModeGuard<'_, B> {
    fn drop(&mut self) {
        if let Err(error) = self.terminal.disable_raw_mode() {
            tracing::warn!(
                message = "raw mode guard failed to restore the terminal",
                error = ?error
            );
        }
    }
}
