//! Capability traits implemented by workbook backends
//!
//! The conversion pipeline never sees a concrete file format. A backend
//! exposes its sheets through [`Workbook`] and [`Sheet`], hands out rows as
//! [`Row`] values, and provides a [`FormulaEvaluator`] bound to the open
//! workbook.

use std::borrow::Cow;

use crate::cell::{Cell, CellValue};
use crate::error::Error;
use crate::row::Row;

/// An ordered grid of rows within a workbook
pub trait Sheet {
    /// Sheet name
    fn name(&self) -> &str;

    /// Index of the last present row, `None` if the sheet has no rows
    fn last_row_index(&self) -> Option<u32>;

    /// Row at `index`, `None` if the row is absent
    fn row(&self, index: u32) -> Option<Row>;
}

/// A workbook that sheets can be loaded from by name or position
pub trait Workbook {
    /// Sheet type produced by this workbook
    type Sheet: Sheet;

    /// Formula evaluator bound to this workbook
    type Evaluator: FormulaEvaluator;

    /// Error type; pipeline errors convert into it
    type Error: From<Error>;

    /// Names of all sheets, in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Load a sheet by exact name, `Ok(None)` if there is no such sheet
    fn sheet_by_name(&mut self, name: &str) -> Result<Option<Self::Sheet>, Self::Error>;

    /// Load a sheet by zero-based position
    fn sheet_at(&mut self, index: usize) -> Result<Self::Sheet, Self::Error>;

    /// Create the formula evaluator for this workbook
    fn formula_evaluator(&self) -> Self::Evaluator;
}

/// Resolves formula cells to displayable values
pub trait FormulaEvaluator {
    /// Evaluate `cell`. `None` means the cell could not be evaluated.
    fn evaluate<'c>(&self, cell: &'c Cell) -> Option<Cow<'c, CellValue>>;
}

/// Evaluates formulas to the result stored in the file by the application
/// that last calculated it.
///
/// A formula without a stored result evaluates to blank. Non-formula cells
/// evaluate to their own value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedResultEvaluator;

impl FormulaEvaluator for CachedResultEvaluator {
    fn evaluate<'c>(&self, cell: &'c Cell) -> Option<Cow<'c, CellValue>> {
        match &cell.value {
            CellValue::Formula {
                cached_value: Some(result),
                ..
            } => Some(Cow::Borrowed(result.as_ref())),
            CellValue::Formula {
                cached_value: None,
                ..
            } => Some(Cow::Owned(CellValue::Blank)),
            value => Some(Cow::Borrowed(value)),
        }
    }
}
