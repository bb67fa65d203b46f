// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Add, str::FromStr};
use tracing_core::LevelFilter;

/// Env var holding the log level: `off`, `error`, `warn`, `info`, `debug`, or `trace`.
pub const ENV_LOG_LEVEL: &str = "MCLI_LOG";

/// Env var holding the log file path.
pub const ENV_LOG_FILE: &str = "MCLI_LOG_FILE";

pub const DEFAULT_LOG_FILE_NAME: &str = "mcli.log";

/// Configure where the logs go and at what level.
///
/// The terminal is the program's UI while raw mode is active, so the default writer is
/// a file. Use [`DisplayPreference::Stderr`] when stderr is redirected.
///
/// Configs compose with `+`, see [`WriterConfig`]'s `Add` impl for the merge rule.
///
/// ```no_run
/// use mcli::{DisplayPreference, TracingConfig, try_initialize_logging_global};
///
/// let config = TracingConfig::from(tracing::Level::DEBUG)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// try_initialize_logging_global(config)?;
/// # Ok::<(), miette::Report>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File`: path of the log file. Eg: `/tmp/mcli.log` or `mcli.log`.
/// - `Display`: the [`DisplayPreference`] to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Logging off, file writer on standby.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Read [`ENV_LOG_LEVEL`] and [`ENV_LOG_FILE`]. Unset or unparsable values fall back
    /// to [`TracingConfig::default()`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(ENV_LOG_LEVEL).ok().as_deref(),
            std::env::var(ENV_LOG_FILE).ok().as_deref(),
        )
    }

    fn from_env_values(level: Option<&str>, file: Option<&str>) -> Self {
        let level_filter = level
            .and_then(|it| LevelFilter::from_str(it.trim()).ok())
            .unwrap_or(LevelFilter::OFF);
        let file = file
            .map(str::trim)
            .filter(|it| !it.is_empty())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);
        Self {
            writer_config: WriterConfig::File(file.to_string()),
            level_filter,
        }
    }

    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`TracingConfig`] instances. The more verbose level wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances. The `rhs` clobbers the `self` on collision,
/// since it has higher specificity. A display and a file that don't collide are
/// combined into [`WriterConfig::DisplayAndFile`].
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, wc_rhs) => wc_rhs,
            (wc_lhs, None) => wc_lhs,
            (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

            // Collision (rhs has higher specificity).
            (Display(_), Display(dp_rhs)) => Display(dp_rhs),
            (File(_), File(f_rhs)) => File(f_rhs),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                DisplayAndFile(dp_rhs, f_rhs)
            }
            (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
            (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
        }
    }
}
