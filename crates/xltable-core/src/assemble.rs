//! Sheet selection and the single pass that assembles a [`Table`]

use crate::error::{Error, Result};
use crate::header::build_header;
use crate::materialize::materialize_row;
use crate::options::ReadOptions;
use crate::table::Table;
use crate::workbook::{FormulaEvaluator, Sheet, Workbook};

/// Convert the sheet selected by `options` into a table.
///
/// `options` is expected to be validated already (see [`ReadOptions::resolve`]).
pub fn build_table<W: Workbook>(
    workbook: &mut W,
    options: &ReadOptions,
) -> std::result::Result<Table, W::Error> {
    let sheet = resolve_sheet(workbook, options)?;
    let evaluator = workbook.formula_evaluator();

    log::debug!(
        "converting sheet `{}` (header row {})",
        sheet.name(),
        options.header_row_index
    );

    let table = sheet_to_table(&sheet, &evaluator, options)?;

    log::debug!(
        "sheet `{}` converted: {} columns, {} rows",
        table.name(),
        table.column_count(),
        table.row_count()
    );

    Ok(table)
}

/// Pick the sheet: explicit name, then explicit index, then the first sheet.
fn resolve_sheet<W: Workbook>(
    workbook: &mut W,
    options: &ReadOptions,
) -> std::result::Result<W::Sheet, W::Error> {
    if let Some(name) = options.sheet_name() {
        return match workbook.sheet_by_name(name)? {
            Some(sheet) => Ok(sheet),
            None => Err(Error::SheetNotFound(name.to_owned()).into()),
        };
    }

    workbook.sheet_at(options.sheet_index.unwrap_or(0))
}

/// Walk the rows of `sheet` once, from the header row to the last row.
pub fn sheet_to_table<S: Sheet + ?Sized>(
    sheet: &S,
    evaluator: &dyn FormulaEvaluator,
    options: &ReadOptions,
) -> Result<Table> {
    let header_row_index = options.header_row_index;

    let last_row_index = match sheet.last_row_index() {
        Some(last) if last > header_row_index => last,
        Some(last) => {
            return Err(Error::invalid_header_row(
                header_row_index,
                format!("sheet `{}` ends at row {last}", sheet.name()),
            ))
        }
        None => {
            return Err(Error::invalid_header_row(
                header_row_index,
                format!("sheet `{}` has no rows", sheet.name()),
            ))
        }
    };

    let mut table = Table::new(sheet.name());

    for index in header_row_index..=last_row_index {
        let row = sheet.row(index);

        if index == header_row_index {
            table.set_columns(build_header(row.as_ref(), evaluator, options)?);
            continue;
        }

        if table.column_count() == 0 {
            return Err(Error::invalid_header_row(
                header_row_index,
                format!("no column names found before data row {index}"),
            ));
        }

        match materialize_row(
            row.as_ref(),
            table.column_count(),
            evaluator,
            options.remove_empty_rows,
        ) {
            Some(values) => table.push_row(values),
            None => log::trace!("row {index} is empty, skipped"),
        }
    }

    Ok(table)
}
