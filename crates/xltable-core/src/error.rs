//! Error types for xltable-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the conversion pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty or missing
    #[error("Invalid argument `{name}`: {message}")]
    Argument {
        name: &'static str,
        message: String,
    },

    /// Contradictory or undefined option values
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Format has no workbook parsing strategy
    #[error("Unsupported workbook format: {0}")]
    UnsupportedFormat(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Sheet index out of bounds
    #[error("Sheet index {index} out of bounds (count: {count})")]
    SheetIndexOutOfRange { index: usize, count: usize },

    /// Header row is beyond the sheet content, or data appeared before any column
    #[error("Invalid header row {header_row_index}: {reason}")]
    InvalidHeaderRow {
        header_row_index: u32,
        reason: String,
    },

    /// Repeated column name while duplicates are not allowed
    #[error("Column name already exists: {0}")]
    DuplicateColumnName(String),
}

impl Error {
    /// Create an [`Error::Argument`] for an empty or missing input
    pub fn argument<S: Into<String>>(name: &'static str, message: S) -> Self {
        Error::Argument {
            name,
            message: message.into(),
        }
    }

    /// Create an [`Error::InvalidOption`] with a message
    pub fn invalid_option<S: Into<String>>(msg: S) -> Self {
        Error::InvalidOption(msg.into())
    }

    pub(crate) fn invalid_header_row<S: Into<String>>(header_row_index: u32, reason: S) -> Self {
        Error::InvalidHeaderRow {
            header_row_index,
            reason: reason.into(),
        }
    }
}
