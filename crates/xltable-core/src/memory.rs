//! In-memory workbook
//!
//! Implements the capability traits over cells held in memory. Useful for
//! tests and for callers that already have cell data from another source.

use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::workbook::{CachedResultEvaluator, Sheet, Workbook};

/// A sheet held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    rows: BTreeMap<u32, Row>,
}

impl MemorySheet {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Insert a row, replacing any row with the same index
    pub fn push_row(&mut self, row: Row) {
        self.rows.insert(row.index, row);
    }

    /// Insert a row built from plain values
    pub fn push_values<I, V>(&mut self, index: u32, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let cells = values.into_iter().map(Cell::new).collect();
        self.push_row(Row::new(index, cells));
    }

    /// Number of present rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Sheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    fn row(&self, index: u32) -> Option<Row> {
        self.rows.get(&index).cloned()
    }
}

/// A workbook held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    /// Create a workbook with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet and return its index
    pub fn add_sheet(&mut self, sheet: MemorySheet) -> usize {
        self.sheets.push(sheet);
        self.sheets.len() - 1
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

impl Workbook for MemoryWorkbook {
    type Sheet = MemorySheet;
    type Evaluator = CachedResultEvaluator;
    type Error = Error;

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn sheet_by_name(&mut self, name: &str) -> Result<Option<MemorySheet>> {
        Ok(self.sheets.iter().find(|s| s.name == name).cloned())
    }

    fn sheet_at(&mut self, index: usize) -> Result<MemorySheet> {
        self.sheets
            .get(index)
            .cloned()
            .ok_or(Error::SheetIndexOutOfRange {
                index,
                count: self.sheets.len(),
            })
    }

    fn formula_evaluator(&self) -> CachedResultEvaluator {
        CachedResultEvaluator
    }
}
