//! Conversion options

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workbook container format; picks the parsing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Office Open XML workbook (zipped XML)
    #[default]
    Xlsx,
    /// Macro-enabled Office Open XML workbook
    Xlsm,
    /// Legacy binary workbook (BIFF)
    Xls,
}

impl Format {
    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Xlsx => "xlsx",
            Format::Xlsm => "xlsm",
            Format::Xls => "xls",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parse a format name or extension (`"xlsx"`, `".XLS"`, ...)
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match name.as_str() {
            "xlsx" => Ok(Format::Xlsx),
            "xlsm" => Ok(Format::Xlsm),
            "xls" => Ok(Format::Xls),
            "xlsb" | "ods" | "csv" | "numbers" => Err(Error::UnsupportedFormat(name)),
            _ => Err(Error::invalid_option(format!(
                "`{s}` is not a workbook format"
            ))),
        }
    }
}

/// Options for converting a sheet into a table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    /// Container format (default: XLSX)
    pub format: Format,
    /// Sheet to convert by name. Exclusive with `sheet_index`.
    pub sheet_name: Option<String>,
    /// Sheet to convert by position. Exclusive with `sheet_name`. Falls back to 0.
    pub sheet_index: Option<usize>,
    /// Caps the number of header columns (default: unlimited)
    pub max_columns: Option<usize>,
    /// Row supplying the column names (default: 0)
    pub header_row_index: u32,
    /// Drop data rows whose cells are all null or empty (default: true)
    pub remove_empty_rows: bool,
    /// Rename repeated column names instead of failing (default: true)
    pub allow_duplicate_columns: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            format: Format::Xlsx,
            sheet_name: None,
            sheet_index: None,
            max_columns: None,
            header_row_index: 0,
            remove_empty_rows: true,
            allow_duplicate_columns: true,
        }
    }
}

impl ReadOptions {
    /// Check that the options are consistent
    pub fn validate(&self) -> Result<()> {
        if self.sheet_name().is_some() && self.sheet_index.is_some() {
            return Err(Error::invalid_option(
                "sheet_name and sheet_index cannot be set at once, choose one or the other",
            ));
        }

        if self.max_columns == Some(0) {
            return Err(Error::invalid_option("max_columns must be positive"));
        }

        Ok(())
    }

    /// Sheet name, treating an empty name as unset
    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Validated options, or the defaults when none were given
    pub fn resolve(options: Option<&ReadOptions>) -> Result<Cow<'_, ReadOptions>> {
        match options {
            Some(options) => {
                options.validate()?;
                Ok(Cow::Borrowed(options))
            }
            None => Ok(Cow::Owned(ReadOptions::default())),
        }
    }
}
