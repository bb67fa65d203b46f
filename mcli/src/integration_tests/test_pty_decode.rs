// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExtendedKey, KeyEvent, Terminal, UnixTerminal, test_fixtures::PtyPair};
use pretty_assertions::assert_eq;
use std::{sync::mpsc, thread, time::Duration};

fn raw_terminal(pty: &PtyPair) -> Terminal<UnixTerminal> {
    let slave = pty.slave.try_clone().unwrap();
    let mut terminal = Terminal::new(UnixTerminal::from_file(slave).unwrap());
    terminal.enable_raw_mode().unwrap();
    terminal
}

#[test]
fn test_keys_typed_on_master_decode_on_slave() {
    let Some(mut pty) = PtyPair::open_or_skip() else { return };
    let mut terminal = raw_terminal(&pty);

    assert_eq!(terminal.read_key(false), KeyEvent::NoKey);

    pty.write_to_master(b"hi\x1b[A\x1b[3~\r");
    pty.wait_until_readable();

    assert_eq!(terminal.read_key(false), KeyEvent::Ascii(b'h'));
    assert_eq!(terminal.read_key(false), KeyEvent::Ascii(b'i'));
    assert_eq!(terminal.read_key(false), ExtendedKey::Up.into());
    assert_eq!(terminal.read_key(false), ExtendedKey::Delete.into());
    // ICRNL is left on, so Enter may arrive as LF.
    assert!(terminal.read_key(false).is_enter());
    assert_eq!(terminal.read_key(false), KeyEvent::NoKey);

    terminal.cleanup().unwrap();
}

#[test]
fn test_bare_escape_from_pty() {
    let Some(mut pty) = PtyPair::open_or_skip() else { return };
    let mut terminal = raw_terminal(&pty);

    pty.write_to_master(b"\x1b");
    pty.wait_until_readable();

    assert_eq!(terminal.read_key(true), KeyEvent::Escape);
    terminal.cleanup().unwrap();
}

#[test]
fn test_blocking_read_waits_for_input() {
    let Some(mut pty) = PtyPair::open_or_skip() else { return };
    let mut terminal = raw_terminal(&pty);

    let writer = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        pty.write_to_master(b"q");
        pty
    });

    assert_eq!(terminal.read_key(true), KeyEvent::Ascii(b'q'));
    terminal.cleanup().unwrap();
    drop(writer.join().unwrap());
}

#[test]
fn test_incomplete_sequence_returns_promptly() {
    let Some(mut pty) = PtyPair::open_or_skip() else { return };
    let mut terminal = raw_terminal(&pty);

    pty.write_to_master(b"\x1b[");
    pty.wait_until_readable();

    // Decode on another thread, so a read that waits forever fails the test instead
    // of hanging it.
    let (sender, receiver) = mpsc::channel();
    let reader = thread::spawn(move || {
        let key = terminal.read_key(false);
        sender.send(key).unwrap();
        terminal
    });
    let key = receiver
        .recv_timeout(Duration::from_secs(2))
        .expect("read_key(false) waited on an incomplete sequence");
    assert_eq!(key, KeyEvent::NoKey);
    let mut terminal = reader.join().unwrap();

    // The next keystroke is decoded on its own.
    pty.write_to_master(b"a");
    pty.wait_until_readable();
    assert_eq!(terminal.read_key(false), KeyEvent::Ascii(b'a'));
    assert_eq!(terminal.read_key(false), KeyEvent::NoKey);

    terminal.cleanup().unwrap();
}
