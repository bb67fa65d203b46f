// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Transition table for the `CSI` (`ESC [`) part of the key decoder.
//!
//! # Sequence format
//!
//! - `CSI final_byte`: arrows and Home/End, eg: `ESC [ A` is Up.
//! - `CSI n ~`: navigation and function keys, eg: `ESC [ 3 ~` is Delete.
//!
//! Function key codes (with gaps, not sequential):
//! - F1: 11, F2: 12, F3: 13, F4: 14, F5: 15
//! - F6: 17, F7: 18, F8: 19, F9: 20, F10: 21
//! - F11: 23, F12: 24
//!
//! Adding a new sequence is an edit to one of the tables below.

use super::ExtendedKey;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex).
pub const ANSI_CSI_BRACKET: u8 = b'[';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex).
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const SPECIAL_HOME_FINAL: u8 = b'H';
pub const SPECIAL_END_FINAL: u8 = b'F';

const FINAL_BYTE_KEYS: &[(u8, ExtendedKey)] = &[
    (ARROW_UP_FINAL, ExtendedKey::Up),
    (ARROW_DOWN_FINAL, ExtendedKey::Down),
    (ARROW_RIGHT_FINAL, ExtendedKey::Right),
    (ARROW_LEFT_FINAL, ExtendedKey::Left),
    (SPECIAL_HOME_FINAL, ExtendedKey::Home),
    (SPECIAL_END_FINAL, ExtendedKey::End),
];

const VT100_TILDE_KEYS: &[(u16, ExtendedKey)] = &[
    (3, ExtendedKey::Delete),
    (5, ExtendedKey::PageUp),
    (6, ExtendedKey::PageDown),
];

const XTERM_TILDE_KEYS: &[(u16, ExtendedKey)] = &[
    (1, ExtendedKey::Home),
    (2, ExtendedKey::Insert),
    (3, ExtendedKey::Delete),
    (4, ExtendedKey::End),
    (5, ExtendedKey::PageUp),
    (6, ExtendedKey::PageDown),
    // rxvt.
    (7, ExtendedKey::Home),
    (8, ExtendedKey::End),
    (11, ExtendedKey::F1),
    (12, ExtendedKey::F2),
    (13, ExtendedKey::F3),
    (14, ExtendedKey::F4),
    (15, ExtendedKey::F5),
    (17, ExtendedKey::F6),
    (18, ExtendedKey::F7),
    (19, ExtendedKey::F8),
    (20, ExtendedKey::F9),
    (21, ExtendedKey::F10),
    (23, ExtendedKey::F11),
    (24, ExtendedKey::F12),
];

/// Which `CSI` sequences the decoder recognizes.
///
/// [`CsiKeyTable::vt100()`] is the default and recognizes exactly the arrows,
/// Home/End, and `3~` / `5~` / `6~`. [`CsiKeyTable::xterm()`] adds Insert, the
/// alternate Home/End codes, and F1-F12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsiKeyTable {
    final_bytes: &'static [(u8, ExtendedKey)],
    tilde_codes: &'static [(u16, ExtendedKey)],
}

impl Default for CsiKeyTable {
    fn default() -> Self { Self::vt100() }
}

impl CsiKeyTable {
    #[must_use]
    pub const fn vt100() -> Self {
        Self {
            final_bytes: FINAL_BYTE_KEYS,
            tilde_codes: VT100_TILDE_KEYS,
        }
    }

    #[must_use]
    pub const fn xterm() -> Self {
        Self {
            final_bytes: FINAL_BYTE_KEYS,
            tilde_codes: XTERM_TILDE_KEYS,
        }
    }

    /// `CSI final_byte` lookup.
    #[must_use]
    pub fn final_byte(&self, byte: u8) -> Option<ExtendedKey> {
        self.final_bytes
            .iter()
            .find(|(final_byte, _)| *final_byte == byte)
            .map(|(_, key)| *key)
    }

    /// `CSI code ~` lookup.
    #[must_use]
    pub fn tilde_code(&self, code: u16) -> Option<ExtendedKey> {
        self.tilde_codes
            .iter()
            .find(|(it, _)| *it == code)
            .map(|(_, key)| *key)
    }

    /// Is there any `CSI n ~` code whose decimal digits start with the digits of
    /// `partial`? Used to decide whether reading another digit can still succeed.
    #[must_use]
    pub fn has_code_with_prefix(&self, partial: u16) -> bool {
        if partial == 0 {
            return false;
        }
        self.tilde_codes.iter().any(|(code, _)| {
            let mut it = *code;
            while it >= partial {
                if it == partial {
                    return true;
                }
                it /= 10;
            }
            false
        })
    }
}
