// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logical, platform independent key identifiers.

use strum_macros::{Display, EnumCount, EnumIter};

/// ESC byte (27 in decimal, 0x1B in hex).
pub const ASCII_ESC: u8 = 0x1B;

/// Carriage return, sent by the Enter key in raw mode.
pub const ASCII_CR: u8 = b'\r';

/// Line feed, sent by Enter on some terminals (and by Ctrl+J).
pub const ASCII_LF: u8 = b'\n';

/// DEL, sent by the Backspace key on most VT100 compatible terminals.
pub const ASCII_DEL: u8 = 0x7F;

/// BS, sent by the Backspace key on consoles and by Ctrl+H.
pub const ASCII_BS: u8 = 0x08;

/// BEL, rings the terminal bell when written to the output stream.
pub const ASCII_BEL: u8 = 0x07;

/// Keys with no single byte ASCII representation.
///
/// These are conveyed either by a VT100 escape sequence (`ESC [ A`) or by a legacy
/// prefix byte plus scan code pair (`0xE0 72`). Both decoding strategies resolve to
/// this same enumeration so callers never see the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ExtendedKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl ExtendedKey {
    /// Function key `F{n}` for `n` in `1..=12`.
    #[must_use]
    pub fn function(n: u8) -> Option<Self> {
        use ExtendedKey::{F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12};
        const FUNCTION_KEYS: [ExtendedKey; 12] =
            [F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12];
        let index = usize::from(n).checked_sub(1)?;
        FUNCTION_KEYS.get(index).copied()
    }

    #[must_use]
    pub fn is_arrow(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

/// The result of one decode call.
///
/// [`KeyEvent::NoKey`] is a distinct sentinel. It is never confused with ASCII `0`
/// (Ctrl+Space / Ctrl+@), which decodes to `KeyEvent::Ascii(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEvent {
    /// A plain ASCII code in `0..=127`. Bytes above 127 (eg: the lead and continuation
    /// bytes of UTF-8 text) are not decoded further and pass through one byte per key.
    Ascii(u8),
    /// ESC pressed on its own, with no sequence following it.
    Escape,
    /// Arrow, navigation, or function key.
    Extended(ExtendedKey),
    /// Nothing available, or the input was an unrecognized / incomplete sequence.
    #[default]
    NoKey,
}

impl KeyEvent {
    #[must_use]
    pub fn is_no_key(self) -> bool { matches!(self, Self::NoKey) }

    #[must_use]
    pub fn as_ascii(self) -> Option<u8> {
        match self {
            Self::Ascii(byte) => Some(byte),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> Option<char> { self.as_ascii().map(char::from) }

    /// CR or LF.
    #[must_use]
    pub fn is_enter(self) -> bool {
        matches!(self, Self::Ascii(ASCII_CR | ASCII_LF))
    }

    /// DEL or BS.
    #[must_use]
    pub fn is_backspace(self) -> bool {
        matches!(self, Self::Ascii(ASCII_DEL | ASCII_BS))
    }

    /// Space through tilde.
    #[must_use]
    pub fn is_printable(self) -> bool { matches!(self, Self::Ascii(0x20..=0x7E)) }

    /// Any byte in `0x00..=0x1F`, excluding the ones covered by [`Self::is_enter`] and
    /// [`Self::is_backspace`].
    #[must_use]
    pub fn is_control(self) -> bool {
        matches!(self, Self::Ascii(0x00..=0x1F)) && !self.is_enter() && !self.is_backspace()
    }
}

impl From<ExtendedKey> for KeyEvent {
    fn from(key: ExtendedKey) -> Self { Self::Extended(key) }
}
