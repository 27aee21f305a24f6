//! Error types shared by the mortgage and exchange-rate engines

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// A precondition that an argument failed before any computation ran
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    /// NaN or infinite value where a finite real number is expected
    #[error("{field} must be a finite number")]
    NotANumber { field: &'static str },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a whole number of years, got {value}")]
    NotWholeYears { field: &'static str, value: f64 },

    #[error("{field} must be 'CAD' or 'USD', got {value:?}")]
    UnsupportedCurrency { field: &'static str, value: String },

    #[error("{field} must be a non-empty string")]
    EmptySourceLocation { field: &'static str },
}

/// Errors surfaced by the payment calculator and the rate converter
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The rate table has no column with the required header
    #[error("rate source {source_location} has no {column:?} column")]
    MissingColumn {
        column: &'static str,
        source_location: String,
    },

    /// Every row of the rate column was blank or unparsable
    #[error("rate source {source_location} contains no numeric {column} values")]
    NoNumericRate {
        column: &'static str,
        source_location: String,
    },

    /// The latest rate is zero, so CAD cannot be converted to USD
    #[error("rate source {source_location} has a zero {column} rate; cannot divide by it")]
    ZeroRate {
        column: &'static str,
        source_location: String,
    },

    #[error("failed to read rate source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rate source: {0}")]
    Csv(#[from] csv::Error),
}

/// Coarse classification of [`Error`] for callers deciding how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    /// Required column missing
    SourceFormat,
    /// No parseable value found
    SourceContent,
    /// The source could not be opened or decoded
    SourceRead,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::MissingColumn { .. } => ErrorKind::SourceFormat,
            Error::NoNumericRate { .. } | Error::ZeroRate { .. } => ErrorKind::SourceContent,
            Error::Io(_) | Error::Csv(_) => ErrorKind::SourceRead,
        }
    }

    /// The argument violation, if this is an invalid-argument error
    pub fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match self {
            Error::InvalidArgument(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Check that `value` is a finite, non-negative amount
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(InvalidArgument::NotANumber { field }.into());
    }
    if value < 0.0 {
        return Err(InvalidArgument::Negative { field, value }.into());
    }
    Ok(value)
}
