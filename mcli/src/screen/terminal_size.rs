// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PlatformTerminal, TermError, TermResult};
use std::fmt::{Display, Formatter, Result};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl Display for TerminalSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Query the size of the terminal attached to the process's stdout. Only stdout is
/// looked at, so this is safe to call while stdin is redirected.
///
/// # Errors
///
/// [`TermError::QuerySize`] if stdout is not a terminal (eg: redirected to a file).
pub fn query_size() -> TermResult<TerminalSize> {
    PlatformTerminal::query_stdout_size().map_err(TermError::query_size)
}
