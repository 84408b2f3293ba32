//! Data rows to table rows

use crate::row::Row;
use crate::stringify::cell_to_string;
use crate::workbook::FormulaEvaluator;

/// Convert a data row into one value per column.
///
/// An absent row reads as all blank. Returns `None` when the row should be
/// dropped: `remove_empty_rows` is set and every value is null or empty.
pub(crate) fn materialize_row(
    row: Option<&Row>,
    column_count: usize,
    evaluator: &dyn FormulaEvaluator,
    remove_empty_rows: bool,
) -> Option<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match row {
        Some(row) => (0..column_count)
            .map(|col| cell_to_string(row.cell(col), Some(evaluator)))
            .collect(),
        None => vec![None; column_count],
    };

    if remove_empty_rows && !has_data(&values) {
        return None;
    }

    Some(values)
}

fn has_data(values: &[Option<String>]) -> bool {
    values
        .iter()
        .any(|value| value.as_deref().is_some_and(|s| !s.is_empty()))
}
