//! Row types

use crate::cell::{Cell, BLANK_CELL};

/// One physical row of a sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    /// Cells by column index; trailing positions past the end are blank
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new row
    pub fn new(index: u32, cells: Vec<Cell>) -> Self {
        Self { index, cells }
    }

    /// Get a cell by column index, treating missing cells as blank
    pub fn cell(&self, col: usize) -> &Cell {
        self.cells.get(col).unwrap_or(&BLANK_CELL)
    }

    /// Index of the last populated cell, if any
    pub fn last_cell_index(&self) -> Option<usize> {
        self.cells.iter().rposition(|cell| !cell.value.is_blank())
    }

    /// Check if row has no populated cells
    pub fn is_empty(&self) -> bool {
        self.last_cell_index().is_none()
    }
}
