// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy `prefix + scan code` extended keys, as reported by the Windows console's
//! `_getch()`. The first call returns a prefix byte, the second returns the scan code.

use super::ExtendedKey;

/// Prefix for function keys F1-F10 (and numpad keys with NumLock off).
pub const SCAN_PREFIX_NUL: u8 = 0x00;

/// Prefix for the dedicated navigation keys and F11/F12.
pub const SCAN_PREFIX_EXTENDED: u8 = 0xE0;

const SCAN_CODE_KEYS: &[(u8, ExtendedKey)] = &[
    (72, ExtendedKey::Up),
    (80, ExtendedKey::Down),
    (75, ExtendedKey::Left),
    (77, ExtendedKey::Right),
    (71, ExtendedKey::Home),
    (79, ExtendedKey::End),
    (73, ExtendedKey::PageUp),
    (81, ExtendedKey::PageDown),
    (82, ExtendedKey::Insert),
    (83, ExtendedKey::Delete),
    (59, ExtendedKey::F1),
    (60, ExtendedKey::F2),
    (61, ExtendedKey::F3),
    (62, ExtendedKey::F4),
    (63, ExtendedKey::F5),
    (64, ExtendedKey::F6),
    (65, ExtendedKey::F7),
    (66, ExtendedKey::F8),
    (67, ExtendedKey::F9),
    (68, ExtendedKey::F10),
    (133, ExtendedKey::F11),
    (134, ExtendedKey::F12),
];

#[must_use]
pub fn is_scan_code_prefix(byte: u8) -> bool {
    matches!(byte, SCAN_PREFIX_NUL | SCAN_PREFIX_EXTENDED)
}

/// Both prefixes share one table: the console reports the same scan code for the
/// numpad and dedicated variants of a key.
#[must_use]
pub fn decode_scan_code(prefix: u8, scan_code: u8) -> Option<ExtendedKey> {
    if !is_scan_code_prefix(prefix) {
        return None;
    }
    SCAN_CODE_KEYS
        .iter()
        .find(|(code, _)| *code == scan_code)
        .map(|(_, key)| *key)
}
