//! # xltable-core
//!
//! Core conversion pipeline for the xltable library.
//!
//! Turns one sheet of a workbook into a [`Table`]: named columns taken from a
//! header row, followed by data rows whose cells are rendered as strings.
//! File formats are not handled here; a backend exposes its workbook through
//! the [`Workbook`] and [`Sheet`] traits.
//!
//! - [`CellValue`], [`Cell`], [`Row`] - What a backend hands to the pipeline
//! - [`ReadOptions`] - Sheet selection, header row, column and row policies
//! - [`build_table`] - Runs the conversion against any [`Workbook`]
//!
//! ## Example
//!
//! ```rust
//! use xltable_core::{build_table, MemorySheet, MemoryWorkbook, ReadOptions};
//!
//! let mut sheet = MemorySheet::new("Sheet1");
//! sheet.push_values(0, ["A", "B", "C"]);
//! sheet.push_values(1, [1.0, 2.0, 3.0]);
//!
//! let mut workbook = MemoryWorkbook::new();
//! workbook.add_sheet(sheet);
//!
//! let table = build_table(&mut workbook, &ReadOptions::default()).unwrap();
//! assert_eq!(table.columns(), ["A", "B", "C"]);
//! assert_eq!(table.value(0, "B"), Some("2"));
//! ```

pub mod assemble;
pub mod cell;
pub mod error;
pub mod memory;
pub mod options;
pub mod row;
pub mod stringify;
pub mod table;
pub mod workbook;

mod header;
mod materialize;

// Re-exports for convenience
pub use assemble::{build_table, sheet_to_table};
pub use cell::{Cell, CellError, CellValue};
pub use error::{Error, Result};
pub use memory::{MemorySheet, MemoryWorkbook};
pub use options::{Format, ReadOptions};
pub use row::Row;
pub use stringify::{cell_to_string, DATE_TIME_FORMAT};
pub use table::Table;
pub use workbook::{CachedResultEvaluator, FormulaEvaluator, Sheet, Workbook};
