//! Cell to string conversion

use chrono::NaiveDateTime;

use crate::cell::{Cell, CellValue};
use crate::workbook::FormulaEvaluator;

/// Fixed rendering for date-formatted numbers
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a cell to its table value.
///
/// Blank and error cells give `None`. Formula cells are resolved through
/// `evaluator`; without one the formula text itself is returned.
pub fn cell_to_string(cell: &Cell, evaluator: Option<&dyn FormulaEvaluator>) -> Option<String> {
    match &cell.value {
        CellValue::Blank | CellValue::Error(_) => None,
        CellValue::Number(n) => Some(numeric_to_string(*n, cell)),
        CellValue::String(s) => Some(s.clone()),
        CellValue::Boolean(b) => Some(bool_to_string(*b).to_owned()),
        CellValue::Formula { .. } => {
            let Some(result) = evaluator.and_then(|e| e.evaluate(cell)) else {
                return Some(cell.to_string());
            };

            match result.as_ref() {
                CellValue::Blank | CellValue::Error(_) => None,
                // The date check uses the formula cell's own format
                CellValue::Number(n) => Some(numeric_to_string(*n, cell)),
                CellValue::Boolean(b) => Some(bool_to_string(*b).to_owned()),
                CellValue::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            }
        }
    }
}

fn numeric_to_string(n: f64, cell: &Cell) -> String {
    match cell.date_value {
        Some(date) => date_to_string(date),
        None => number_to_string(n),
    }
}

pub(crate) fn number_to_string(n: f64) -> String {
    n.to_string()
}

pub(crate) fn bool_to_string(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn date_to_string(date: NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}
