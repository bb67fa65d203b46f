// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed cursor and erase control codes. Parameterized sequences (absolute and
//! relative moves) are formatted by [`Screen`](super::Screen).

/// CSI (Control Sequence Introducer): `ESC [`.
pub const CSI: &str = "\x1b[";

pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// SCO save cursor position.
pub const CURSOR_SAVE: &str = "\x1b[s";
/// SCO restore cursor position.
pub const CURSOR_RESTORE: &str = "\x1b[u";

/// Move to row 1, col 1.
pub const CURSOR_HOME: &str = "\x1b[H";

pub const CARRIAGE_RETURN: &str = "\r";

pub const ERASE_SCREEN: &str = "\x1b[2J";
pub const ERASE_LINE: &str = "\x1b[2K";
pub const ERASE_LINE_TO_END: &str = "\x1b[0K";
pub const ERASE_LINE_TO_START: &str = "\x1b[1K";

/// BEL: audible (or visual) bell.
pub const BELL: &str = "\x07";

// Final bytes of `CSI n <final>` relative moves.

pub const CUU_CURSOR_UP: char = 'A';
pub const CUD_CURSOR_DOWN: char = 'B';
pub const CUF_CURSOR_FORWARD: char = 'C';
pub const CUB_CURSOR_BACK: char = 'D';

/// Final byte of `CSI row ; col H`.
pub const CUP_CURSOR_POSITION: char = 'H';
