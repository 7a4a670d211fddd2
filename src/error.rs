use std::fmt::Debug;

use thiserror::Error;

pub type SolarResult<T> = Result<T, SolarError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarError {
    /// Query lies outside the closed-open window `[first, last)` of a sorted sequence.
    #[error("value {value} is outside the covered range [{first}, {last})")]
    OutOfRange {
        value: String,
        first: String,
        last: String,
    },

    #[error("cannot find surrounding elements in an empty sequence")]
    EmptySequence,

    #[error("invalid seasonal table: {message}")]
    InvalidTable { message: String },

    #[error("seasonal dataset line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl SolarError {
    pub fn out_of_range(value: impl Debug, first: impl Debug, last: impl Debug) -> Self {
        Self::OutOfRange {
            value: format!("{value:?}"),
            first: format!("{first:?}"),
            last: format!("{last:?}"),
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// True for every failure caused by a query outside the data's coverage.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::EmptySequence)
    }
}
