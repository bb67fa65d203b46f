// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Terminal, UnixTerminal, test_fixtures::PtyPair};
use pretty_assertions::assert_eq;
use rustix::termios::{self, LocalModes, SpecialCodeIndex, Termios};
use std::fs::File;

fn snapshot(file: &File) -> Termios { termios::tcgetattr(file).unwrap() }

fn assert_same_mode(lhs: &Termios, rhs: &Termios) {
    assert_eq!(lhs.local_modes, rhs.local_modes);
    assert_eq!(lhs.input_modes, rhs.input_modes);
    assert_eq!(lhs.output_modes, rhs.output_modes);
    assert_eq!(lhs.control_modes, rhs.control_modes);
    assert_eq!(
        lhs.special_codes[SpecialCodeIndex::VMIN],
        rhs.special_codes[SpecialCodeIndex::VMIN]
    );
    assert_eq!(
        lhs.special_codes[SpecialCodeIndex::VTIME],
        rhs.special_codes[SpecialCodeIndex::VTIME]
    );
}

#[test]
fn test_enable_disable_round_trip() {
    let Some(pty) = PtyPair::open_or_skip() else { return };
    let probe = pty.slave.try_clone().unwrap();
    let before = snapshot(&probe);
    assert!(before.local_modes.contains(LocalModes::ICANON));

    let mut terminal = Terminal::new(UnixTerminal::from_file(pty.slave).unwrap());
    terminal.enable_raw_mode().unwrap();

    let raw = snapshot(&probe);
    assert!(!raw.local_modes.contains(LocalModes::ECHO));
    assert!(!raw.local_modes.contains(LocalModes::ICANON));
    assert_eq!(raw.special_codes[SpecialCodeIndex::VMIN], 0);
    assert_eq!(raw.special_codes[SpecialCodeIndex::VTIME], 0);

    // A second enable must not re-snapshot the raw attributes.
    terminal.enable_raw_mode().unwrap();
    terminal.disable_raw_mode().unwrap();
    assert_same_mode(&snapshot(&probe), &before);

    terminal.disable_raw_mode().unwrap();
    assert_same_mode(&snapshot(&probe), &before);
}

#[test]
fn test_guard_and_drop_restore() {
    let Some(pty) = PtyPair::open_or_skip() else { return };
    let probe = pty.slave.try_clone().unwrap();
    let before = snapshot(&probe);

    {
        let mut terminal = Terminal::new(UnixTerminal::from_file(pty.slave).unwrap());
        {
            let _guard = terminal.raw_mode_guard().unwrap();
            assert!(!snapshot(&probe).local_modes.contains(LocalModes::ICANON));
        }
        assert_same_mode(&snapshot(&probe), &before);

        // Forget to clean up, and let Drop do it.
        terminal.enable_raw_mode().unwrap();
    }

    assert_same_mode(&snapshot(&probe), &before);
}
