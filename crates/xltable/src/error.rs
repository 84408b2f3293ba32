//! Reader error types

use thiserror::Error;

/// Result type for reading tables from workbooks
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while reading a workbook into a table
#[derive(Debug, Error)]
pub enum ReadError {
    /// Conversion error (options, sheet selection, header, columns)
    #[error(transparent)]
    Core(#[from] xltable_core::Error),

    /// XLSX/XLSM parse error, as reported by the parser
    #[error(transparent)]
    Xlsx(#[from] calamine::XlsxError),

    /// XLS parse error, as reported by the parser
    #[error(transparent)]
    Xls(#[from] calamine::XlsError),

    /// IO error opening the source file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// The conversion error, if this is one
    pub fn as_core(&self) -> Option<&xltable_core::Error> {
        match self {
            ReadError::Core(e) => Some(e),
            _ => None,
        }
    }
}
