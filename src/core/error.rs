//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// The underlying reader failed while tokenizing.
///
/// Malformed numbers never end up here: they simply start the next data set.
#[derive(Debug)]
pub struct ReadError {
    /// 1-based line being read when the failure happened
    pub line: usize,
    pub source: io::Error,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read failed on line {}: {}", self.line, self.source)
    }
}
impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    InvalidFraction { field: &'static str, value: f64 },
    NoPlotArea { bottom: f64, top: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFraction { field, value } => {
                write!(f, "`{field}` must be a fraction in [0, 1), got {value}")
            }
            ConfigError::NoPlotArea { bottom, top } => {
                write!(f, "no room left to plot: bottom {bottom} must be < top {top}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    Read(ReadError),
    Config(ConfigError),
    /// Writing the command stream failed
    Io(io::Error),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Read(e) => write!(f, "{e}"),
            PlotError::Config(e) => write!(f, "{e}"),
            PlotError::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}
impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Read(e) => Some(e),
            PlotError::Config(e) => Some(e),
            PlotError::Io(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ReadError> for PlotError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
