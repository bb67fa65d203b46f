// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for every fallible terminal operation.
//!
//! Each fallible operation is a single OS call, and its failure is reported to the
//! caller immediately. There is no retry logic. The caller decides whether to abort
//! the session.
//!
//! | Variant                    | Raised by                                          |
//! | :------------------------- | :------------------------------------------------- |
//! | [`TermError::Init`]        | [`Terminal::initialize()`]                         |
//! | [`TermError::Attribute`]   | raw mode enable, disable, and restore              |
//! | [`TermError::QuerySize`]   | [`Terminal::query_size()`], [`query_size()`]       |
//!
//! Key decoding never produces an error. Unrecognized or incomplete escape sequences
//! resolve to [`KeyEvent::NoKey`] instead.
//!
//! [`KeyEvent::NoKey`]: crate::KeyEvent::NoKey
//! [`Terminal::initialize()`]: crate::Terminal::initialize
//! [`Terminal::query_size()`]: crate::Terminal::query_size
//! [`query_size()`]: crate::query_size

use strum_macros::{Display, EnumString};

/// Which terminal attribute call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AttributeOperation {
    /// Reading the current terminal attributes (snapshot).
    Get,
    /// Applying the modified (raw) attributes.
    Set,
    /// Writing the original snapshot back.
    Restore,
}

/// Errors surfaced by the terminal layer.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TermError {
    /// Control code interpretation could not be enabled on the output handle.
    #[error("Failed to enable control code interpretation on the output handle")]
    #[diagnostic(
        code(mcli::init),
        help("Make sure stdout is attached to a console that supports VT sequences")
    )]
    Init {
        #[source]
        source: std::io::Error,
    },

    /// Terminal mode get, set, or restore failed.
    #[error("Failed to {operation} terminal attributes")]
    #[diagnostic(
        code(mcli::raw_mode::attribute),
        help("Raw mode requires stdin (or /dev/tty) to be a real terminal device")
    )]
    Attribute {
        operation: AttributeOperation,
        #[source]
        source: std::io::Error,
    },

    /// The output stream is not attached to a terminal.
    #[error("Failed to query the terminal size")]
    #[diagnostic(
        code(mcli::screen::query_size),
        help("Is stdout redirected to a file or a pipe?")
    )]
    QuerySize {
        #[source]
        source: std::io::Error,
    },
}

impl TermError {
    pub fn attribute(operation: AttributeOperation, source: impl Into<std::io::Error>) -> Self {
        Self::Attribute {
            operation,
            source: source.into(),
        }
    }

    pub fn init(source: impl Into<std::io::Error>) -> Self {
        Self::Init {
            source: source.into(),
        }
    }

    pub fn query_size(source: impl Into<std::io::Error>) -> Self {
        Self::QuerySize {
            source: source.into(),
        }
    }
}

pub type TermResult<T> = Result<T, TermError>;
