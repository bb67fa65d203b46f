// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BELL, CARRIAGE_RETURN, CSI, CUB_CURSOR_BACK, CUD_CURSOR_DOWN,
            CUF_CURSOR_FORWARD, CUP_CURSOR_POSITION, CUU_CURSOR_UP, CURSOR_HIDE,
            CURSOR_HOME, CURSOR_RESTORE, CURSOR_SAVE, CURSOR_SHOW, ERASE_LINE,
            ERASE_LINE_TO_END, ERASE_LINE_TO_START, ERASE_SCREEN};
use std::io::{self, Write};
use strum_macros::{Display, EnumIter};

/// Direction of a relative cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Forward,
    Back,
}

impl Direction {
    #[must_use]
    pub const fn final_char(self) -> char {
        match self {
            Direction::Up => CUU_CURSOR_UP,
            Direction::Down => CUD_CURSOR_DOWN,
            Direction::Forward => CUF_CURSOR_FORWARD,
            Direction::Back => CUB_CURSOR_BACK,
        }
    }
}

/// Emits cursor, visibility, and erase control codes to `W`.
///
/// Holds no screen state. Every operation writes its control code and then flushes,
/// so each call is visible on its own. Code that renders many operations in a row can
/// wrap `W` in a [`std::io::BufWriter`] and flush once at the end instead.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
}

impl Screen<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self { Self::new(io::stdout()) }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn get_ref(&self) -> &W { &self.out }

    pub fn get_mut(&mut self) -> &mut W { &mut self.out }

    pub fn into_inner(self) -> W { self.out }

    fn emit(&mut self, code: &str) -> io::Result<()> {
        self.out.write_all(code.as_bytes())?;
        self.out.flush()
    }

    /// Move to an absolute position. `row` and `col` are 1-indexed.
    ///
    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.emit(&format!("{CSI}{row};{col}{CUP_CURSOR_POSITION}"))
    }

    /// Move `n` cells in `direction`. `n <= 0` writes nothing.
    ///
    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn move_relative(&mut self, direction: Direction, n: i32) -> io::Result<()> {
        if n <= 0 {
            return Ok(());
        }
        self.emit(&format!("{CSI}{n}{}", direction.final_char()))
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn cursor_up(&mut self, n: i32) -> io::Result<()> {
        self.move_relative(Direction::Up, n)
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn cursor_down(&mut self, n: i32) -> io::Result<()> {
        self.move_relative(Direction::Down, n)
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn cursor_forward(&mut self, n: i32) -> io::Result<()> {
        self.move_relative(Direction::Forward, n)
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn cursor_back(&mut self, n: i32) -> io::Result<()> {
        self.move_relative(Direction::Back, n)
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn cursor_to_line_start(&mut self) -> io::Result<()> { self.emit(CARRIAGE_RETURN) }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn show_cursor(&mut self) -> io::Result<()> { self.emit(CURSOR_SHOW) }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn hide_cursor(&mut self) -> io::Result<()> { self.emit(CURSOR_HIDE) }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn save_cursor(&mut self) -> io::Result<()> { self.emit(CURSOR_SAVE) }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn restore_cursor(&mut self) -> io::Result<()> { self.emit(CURSOR_RESTORE) }

    /// Erase the whole screen and move the cursor home.
    ///
    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.emit(&format!("{ERASE_SCREEN}{CURSOR_HOME}"))
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn clear_line(&mut self) -> io::Result<()> { self.emit(ERASE_LINE) }

    /// Erase from the cursor to the end of the line.
    ///
    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn clear_to_end_of_line(&mut self) -> io::Result<()> { self.emit(ERASE_LINE_TO_END) }

    /// Erase from the start of the line to the cursor.
    ///
    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn clear_to_start_of_line(&mut self) -> io::Result<()> {
        self.emit(ERASE_LINE_TO_START)
    }

    /// # Errors
    ///
    /// Any write or flush error from `W`.
    pub fn ring_bell(&mut self) -> io::Result<()> { self.emit(BELL) }
}
