// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence decoding as an explicit finite state machine.
//!
//! ```text
//!            ESC               '['             digit d
//!  Start ─────────▶ SawEscape ─────▶ SawBracket ───────▶ SawDigit(d) ──┐ digit
//!    │                  │                 │                   ▲   │      │
//!    │ other            │ other / no      │ A B C D H F       └───┼──────┘
//!    ▼                  ▼ further byte    ▼                       │ '~'
//!  Ascii(b)           Escape           Extended(..)          Extended(..)
//! ```
//!
//! Every state that does not match the table emits [`KeyEvent::NoKey`], which drops the
//! partial sequence. Decoding never raises an error, since terminal input is best
//! effort and malformed input must not halt the caller's main loop.
//!
//! # Bare ESC vs. sequence start
//!
//! After reading ESC the decoder checks, without blocking, whether a further byte is
//! queued. If none is, the result is [`KeyEvent::Escape`]. This is a timing
//! heuristic: a sequence whose second byte arrives a moment after that check (slow
//! link, byte-by-byte delivery) is decoded as a bare Escape followed by plain ASCII
//! keys. This is a known limitation and is kept as is.

use super::{ANSI_CSI_BRACKET, ANSI_FUNCTION_KEY_TERMINATOR, ASCII_ESC, CsiKeyTable,
            KeyEvent, RawByteSource};
use smallvec::SmallVec;

/// Bytes consumed so far by one decode call. Only used for diagnostics.
type ConsumedBytes = SmallVec<[u8; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Start,
    SawEscape,
    SawBracket,
    SawDigit(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Consume another byte in the given state.
    Next(DecodeState),
    /// Decoding is finished.
    Emit(KeyEvent),
}

/// Turns bytes from a [`RawByteSource`] into one [`KeyEvent`] per call.
///
/// The decoder itself holds no per-call state, so a single instance can be reused
/// for the lifetime of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyDecoder {
    table: CsiKeyTable,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_table(table: CsiKeyTable) -> Self { Self { table } }

    #[must_use]
    pub fn table(&self) -> CsiKeyTable { self.table }

    /// Decode one key.
    ///
    /// With `blocking == false` and nothing queued, returns [`KeyEvent::NoKey`]
    /// immediately without touching the stream. With `blocking == true`, waits for the
    /// first byte. That is the only place a decode call ever waits: every later byte of
    /// a sequence is read without waiting, and a sequence cut short by an empty queue
    /// decodes as [`KeyEvent::NoKey`] (or [`KeyEvent::Escape`] right after ESC).
    pub fn decode(&self, mut source: impl RawByteSource, blocking: bool) -> KeyEvent {
        if !blocking && !source.poll() {
            return KeyEvent::NoKey;
        }

        let Some(first) = source.read_blocking() else {
            tracing::trace!(message = "input stream closed before first byte");
            return KeyEvent::NoKey;
        };

        if source.is_extended_prefix(first) {
            return Self::decode_scan_code(&mut source, first);
        }

        let mut consumed = ConsumedBytes::new();
        let mut state = DecodeState::Start;
        let mut byte = first;

        loop {
            consumed.push(byte);
            match self.transition(state, byte) {
                Transition::Emit(key) => {
                    if key.is_no_key() {
                        tracing::trace!(
                            message = "dropped unrecognized sequence",
                            bytes = ?consumed.as_slice()
                        );
                    }
                    return key;
                }
                Transition::Next(next) => {
                    state = next;
                    match source.read_nonblocking() {
                        Some(it) => byte = it,
                        None if next == DecodeState::SawEscape => return KeyEvent::Escape,
                        None => {
                            tracing::trace!(
                                message = "incomplete sequence, nothing queued",
                                bytes = ?consumed.as_slice()
                            );
                            return KeyEvent::NoKey;
                        }
                    }
                }
            }
        }
    }

    fn transition(&self, state: DecodeState, byte: u8) -> Transition {
        match state {
            DecodeState::Start => {
                if byte == ASCII_ESC {
                    Transition::Next(DecodeState::SawEscape)
                } else {
                    Transition::Emit(KeyEvent::Ascii(byte))
                }
            }
            // The byte after ESC is dropped when it is not '['.
            DecodeState::SawEscape => {
                if byte == ANSI_CSI_BRACKET {
                    Transition::Next(DecodeState::SawBracket)
                } else {
                    Transition::Emit(KeyEvent::Escape)
                }
            }
            DecodeState::SawBracket => {
                if let Some(key) = self.table.final_byte(byte) {
                    return Transition::Emit(KeyEvent::Extended(key));
                }
                match digit_value(byte) {
                    Some(digit) if self.table.has_code_with_prefix(digit) => {
                        Transition::Next(DecodeState::SawDigit(digit))
                    }
                    _ => Transition::Emit(KeyEvent::NoKey),
                }
            }
            DecodeState::SawDigit(code) => {
                if byte == ANSI_FUNCTION_KEY_TERMINATOR {
                    return Transition::Emit(
                        self.table
                            .tilde_code(code)
                            .map_or(KeyEvent::NoKey, KeyEvent::Extended),
                    );
                }
                let extended = digit_value(byte).and_then(|digit| {
                    code.checked_mul(10).and_then(|it| it.checked_add(digit))
                });
                match extended {
                    Some(next) if self.table.has_code_with_prefix(next) => {
                        Transition::Next(DecodeState::SawDigit(next))
                    }
                    _ => Transition::Emit(KeyEvent::NoKey),
                }
            }
        }
    }

    fn decode_scan_code(source: &mut impl RawByteSource, prefix: u8) -> KeyEvent {
        let Some(scan_code) = source.read_nonblocking() else {
            return KeyEvent::NoKey;
        };
        match source.decode_extended_prefix(prefix, scan_code) {
            Some(key) => KeyEvent::Extended(key),
            None => {
                tracing::trace!(
                    message = "dropped unknown scan code",
                    prefix = prefix,
                    scan_code = scan_code
                );
                KeyEvent::NoKey
            }
        }
    }
}

fn digit_value(byte: u8) -> Option<u16> {
    byte.is_ascii_digit().then(|| u16::from(byte - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtendedKey, test_fixtures::MockTerminal};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn decode_one(decoder: KeyDecoder, bytes: &[u8]) -> (KeyEvent, usize) {
        let mut source = MockTerminal::with_input(bytes);
        let key = decoder.decode(&mut source, true);
        (key, source.remaining_input())
    }

    #[test_case(b"\x1b[A", KeyEvent::Extended(ExtendedKey::Up); "arrow up")]
    #[test_case(b"\x1b[B", KeyEvent::Extended(ExtendedKey::Down); "arrow down")]
    #[test_case(b"\x1b[C", KeyEvent::Extended(ExtendedKey::Right); "arrow right")]
    #[test_case(b"\x1b[D", KeyEvent::Extended(ExtendedKey::Left); "arrow left")]
    #[test_case(b"\x1b[H", KeyEvent::Extended(ExtendedKey::Home); "home")]
    #[test_case(b"\x1b[F", KeyEvent::Extended(ExtendedKey::End); "end")]
    #[test_case(b"\x1b[3~", KeyEvent::Extended(ExtendedKey::Delete); "delete")]
    #[test_case(b"\x1b[5~", KeyEvent::Extended(ExtendedKey::PageUp); "page up")]
    #[test_case(b"\x1b[6~", KeyEvent::Extended(ExtendedKey::PageDown); "page down")]
    #[test_case(b"\x1b", KeyEvent::Escape; "bare escape")]
    #[test_case(b"\x1b[Z", KeyEvent::NoKey; "unrecognized final byte")]
    #[test_case(b"\x1b[3x", KeyEvent::NoKey; "digit without tilde")]
    #[test_case(b"\x1b[2~", KeyEvent::NoKey; "insert not in vt100 table")]
    #[test_case(b"\x1bOP", KeyEvent::Escape; "escape then non bracket")]
    #[test_case(b"a", KeyEvent::Ascii(97); "plain ascii")]
    #[test_case(b"\r", KeyEvent::Ascii(13); "carriage return")]
    #[test_case(b"\x00", KeyEvent::Ascii(0); "nul is ascii zero")]
    #[test_case(b"\xc3", KeyEvent::Ascii(0xC3); "utf8 lead byte passes through")]
    #[test_case(b"\x7f", KeyEvent::Ascii(0x7F); "delete byte is ascii")]
    fn test_vt100_decoding(input: &[u8], expected: KeyEvent) {
        let (key, _) = decode_one(KeyDecoder::new(), input);
        assert_eq!(key, expected);
    }

    #[test_case(b"\x1b[2~", KeyEvent::Extended(ExtendedKey::Insert); "insert")]
    #[test_case(b"\x1b[1~", KeyEvent::Extended(ExtendedKey::Home); "home alt")]
    #[test_case(b"\x1b[4~", KeyEvent::Extended(ExtendedKey::End); "end alt")]
    #[test_case(b"\x1b[11~", KeyEvent::Extended(ExtendedKey::F1); "f1")]
    #[test_case(b"\x1b[15~", KeyEvent::Extended(ExtendedKey::F5); "f5")]
    #[test_case(b"\x1b[17~", KeyEvent::Extended(ExtendedKey::F6); "f6")]
    #[test_case(b"\x1b[24~", KeyEvent::Extended(ExtendedKey::F12); "f12")]
    #[test_case(b"\x1b[16~", KeyEvent::NoKey; "gap at 16")]
    #[test_case(b"\x1b[99~", KeyEvent::NoKey; "unknown code")]
    #[test_case(b"\x1b[A", KeyEvent::Extended(ExtendedKey::Up); "arrows unchanged")]
    fn test_xterm_decoding(input: &[u8], expected: KeyEvent) {
        let (key, _) = decode_one(KeyDecoder::with_table(CsiKeyTable::xterm()), input);
        assert_eq!(key, expected);
    }

    #[test]
    fn test_dropped_byte_after_escape_is_consumed() {
        // ESC O: the 'O' is consumed and dropped, 'P' stays queued.
        let (key, remaining) = decode_one(KeyDecoder::new(), b"\x1bOP");
        assert_eq!(key, KeyEvent::Escape);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_unrecognized_digit_does_not_read_further() {
        // '1' has no vt100 entry, so decoding stops right after it.
        let (key, remaining) = decode_one(KeyDecoder::new(), b"\x1b[1~");
        assert_eq!(key, KeyEvent::NoKey);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_nonblocking_with_nothing_queued_never_reads() {
        let mut source = MockTerminal::new();
        let key = KeyDecoder::new().decode(&mut source, false);
        assert_eq!(key, KeyEvent::NoKey);
        assert_eq!(source.read_count(), 0);
    }

    #[test]
    fn test_stream_closed_mid_sequence_is_no_key() {
        let (key, _) = decode_one(KeyDecoder::new(), b"\x1b[");
        assert_eq!(key, KeyEvent::NoKey);
    }

    #[test_case(b"\x1b["; "after bracket")]
    #[test_case(b"\x1b[3"; "after digit")]
    #[test_case(b"\x1b[1"; "after first digit of two")]
    fn test_incomplete_sequence_does_not_wait_for_more_input(prefix: &[u8]) {
        // The next keystroke arrives later, in its own chunk. It must not be taken as
        // the continuation of the cut off sequence.
        let mut source = MockTerminal::with_chunks(&[prefix, b"a"]);
        let decoder = KeyDecoder::with_table(CsiKeyTable::xterm());

        assert_eq!(decoder.decode(&mut source, false), KeyEvent::NoKey);
        assert_eq!(source.remaining_input(), 1);
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::Ascii(b'a'));
    }

    #[test]
    fn test_incomplete_scan_code_does_not_wait() {
        let mut source = MockTerminal::with_chunks(&[&[0xE0], b"H"]).with_scan_code_prefixes();
        let decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::NoKey);
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::Ascii(b'H'));
    }

    #[test]
    fn test_late_sequence_bytes_decode_as_bare_escape() {
        // The rest of the arrow key sequence arrives after the availability check.
        let mut source = MockTerminal::with_chunks(&[b"\x1b", b"[A"]);
        let decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::Escape);
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::Ascii(b'['));
        assert_eq!(decoder.decode(&mut source, true), KeyEvent::Ascii(b'A'));
    }

    #[test]
    fn test_end_to_end_sequence() {
        let mut source = MockTerminal::with_input(&[b'h', b'i', 0x1b, b'[', b'A', 0x0d]);
        let decoder = KeyDecoder::new();

        let mut keys = vec![];
        loop {
            let key = decoder.decode(&mut source, false);
            if key.is_no_key() {
                break;
            }
            keys.push(key);
        }

        assert_eq!(
            keys,
            vec![
                KeyEvent::Ascii(b'h'),
                KeyEvent::Ascii(b'i'),
                KeyEvent::Extended(ExtendedKey::Up),
                KeyEvent::Ascii(0x0d),
            ]
        );
        assert!(keys[3].is_enter());
    }

    #[test]
    fn test_decoder_is_total_over_all_short_sequences() {
        // Every ESC [ x y sequence produces exactly one key and never panics.
        let decoder = KeyDecoder::with_table(CsiKeyTable::xterm());
        for x in 0..=u8::MAX {
            for y in [b'~', b'1', b'A', 0x1b, 0xFF] {
                let mut source = MockTerminal::with_input(&[0x1b, b'[', x, y]);
                let _key = decoder.decode(&mut source, true);
                assert!(source.remaining_input() <= 2);
            }
        }
    }

    #[test]
    fn test_scan_code_prefix_decoding() {
        let mut source = MockTerminal::with_input(&[0xE0, 72, 0x00, 59, 0xE0, 1, b'q'])
            .with_scan_code_prefixes();
        let decoder = KeyDecoder::new();
        assert_eq!(decoder.decode(&mut source, false), ExtendedKey::Up.into());
        assert_eq!(decoder.decode(&mut source, false), ExtendedKey::F1.into());
        assert_eq!(decoder.decode(&mut source, false), KeyEvent::NoKey);
        assert_eq!(decoder.decode(&mut source, false), KeyEvent::Ascii(b'q'));
    }

    #[test]
    fn test_both_strategies_agree() {
        // The same logical key comes out whether it was sent as CSI or as scan code.
        let decoder = KeyDecoder::with_table(CsiKeyTable::xterm());
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"\x1b[A", &[0xE0, 72]),
            (b"\x1b[3~", &[0xE0, 83]),
            (b"\x1b[2~", &[0xE0, 82]),
            (b"\x1b[23~", &[0xE0, 133]),
        ];
        for (csi, scan) in pairs {
            let mut vt = MockTerminal::with_input(csi);
            let mut console = MockTerminal::with_input(scan).with_scan_code_prefixes();
            assert_eq!(decoder.decode(&mut vt, true), decoder.decode(&mut console, true));
        }
    }
}
