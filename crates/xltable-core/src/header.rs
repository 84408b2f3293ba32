//! Header row to column names

use ahash::AHashSet;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::options::ReadOptions;
use crate::row::Row;
use crate::stringify::cell_to_string;
use crate::workbook::FormulaEvaluator;

/// Prefix for names given to empty header cells
const DEFAULT_COLUMN_PREFIX: &str = "Column";

/// Build the column names from the header row.
///
/// Scans from column 0 through the row's last cell, blanks included. Empty
/// names become `Column1`, `Column2`, ...; repeated names get a random
/// `_<hex>` suffix or fail, depending on `allow_duplicate_columns`.
/// Scanning stops once `max_columns` columns exist.
pub(crate) fn build_header(
    row: Option<&Row>,
    evaluator: &dyn FormulaEvaluator,
    options: &ReadOptions,
) -> Result<Vec<String>> {
    let Some(row) = row else {
        return Ok(Vec::new());
    };
    let Some(last_cell) = row.last_cell_index() else {
        return Ok(Vec::new());
    };

    let mut columns = ColumnNames::default();

    for col in 0..=last_cell {
        let name = cell_to_string(row.cell(col), Some(evaluator))
            .map(|s| s.trim().to_owned())
            .unwrap_or_default();

        columns.add(name, options.allow_duplicate_columns)?;

        if options.max_columns.is_some_and(|max| col + 1 == max) {
            break;
        }
    }

    log::debug!(
        "header row {} produced {} columns",
        row.index,
        columns.names.len()
    );

    Ok(columns.names)
}

#[derive(Debug, Default)]
struct ColumnNames {
    names: Vec<String>,
    seen: AHashSet<String>,
    default_counter: usize,
}

impl ColumnNames {
    fn add(&mut self, name: String, allow_duplicates: bool) -> Result<()> {
        let name = if name.is_empty() {
            self.next_default_name()
        } else if self.seen.contains(&name) {
            if !allow_duplicates {
                return Err(Error::DuplicateColumnName(name));
            }
            self.unique_suffixed(&name)
        } else {
            name
        };

        self.seen.insert(name.clone());
        self.names.push(name);
        Ok(())
    }

    fn next_default_name(&mut self) -> String {
        loop {
            self.default_counter += 1;
            let candidate = format!("{DEFAULT_COLUMN_PREFIX}{}", self.default_counter);
            if !self.seen.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn unique_suffixed(&self, name: &str) -> String {
        loop {
            let candidate = format!("{name}_{}", Uuid::new_v4().simple());
            if !self.seen.contains(&candidate) {
                return candidate;
            }
        }
    }
}
