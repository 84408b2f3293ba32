//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::stringify;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Blank,

    /// Numeric value (all numbers stored as f64, including dates)
    Number(f64),

    /// String value
    String(String),

    /// Boolean value
    Boolean(bool),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),

    /// Formula with the result stored alongside it (if any)
    Formula {
        /// Formula text as stored in the workbook (e.g. "SUM(A1:A10)")
        text: String,
        /// Last calculated value
        cached_value: Option<Box<CellValue>>,
    },
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a formula value without a stored result
    pub fn formula<S: Into<String>>(text: S) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached_value: None,
        }
    }

    /// Create a formula value with its stored result
    pub fn formula_with_result<S: Into<String>>(text: S, result: CellValue) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached_value: Some(Box::new(result)),
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }
}

/// Generic textual representation, used when no better rendering applies.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Blank => Ok(()),
            CellValue::Number(n) => f.write_str(&stringify::number_to_string(*n)),
            CellValue::String(s) => f.write_str(s),
            CellValue::Boolean(b) => f.write_str(stringify::bool_to_string(*b)),
            CellValue::Error(e) => write!(f, "{e}"),
            CellValue::Formula { text, .. } => f.write_str(text),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Excel error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// #GETTING_DATA - External data is loading
    GettingData,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
            CellError::GettingData => "#GETTING_DATA",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell as seen by the conversion pipeline.
///
/// `date_value` carries the date-format metadata: it is set when the cell's
/// number format is a date format and holds the calendar value the cell
/// displays. For formula cells it describes the formula cell itself, not the
/// evaluated result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// The stored value
    pub value: CellValue,
    /// Calendar value when the cell is date-formatted
    pub date_value: Option<NaiveDateTime>,
}

/// Shared blank used for positions a row does not physically contain.
pub(crate) static BLANK_CELL: Cell = Cell {
    value: CellValue::Blank,
    date_value: None,
};

impl Cell {
    /// Create a cell without date formatting
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            date_value: None,
        }
    }

    /// Create a blank cell
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a date-formatted numeric cell holding the 1900-system serial of `date`
    pub fn date(date: NaiveDateTime) -> Self {
        Self {
            value: CellValue::Number(excel_serial(date)),
            date_value: Some(date),
        }
    }

    /// Attach date-format metadata to this cell
    pub fn with_date_value(mut self, date: NaiveDateTime) -> Self {
        self.date_value = Some(date);
        self
    }

    /// Check if the cell is date-formatted
    pub fn is_date_formatted(&self) -> bool {
        self.date_value.is_some()
    }
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Cell::new(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.date_value) {
            (CellValue::Number(_), Some(date)) => f.write_str(&stringify::date_to_string(date)),
            (value, _) => write!(f, "{value}"),
        }
    }
}

/// Days since 1899-12-30, the 1900 date system epoch (valid from March 1900 on).
fn excel_serial(date: NaiveDateTime) -> f64 {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0.0, |epoch| {
            (date - epoch).num_milliseconds() as f64 / 86_400_000.0
        })
}
