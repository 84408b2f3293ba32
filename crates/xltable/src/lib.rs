//! # xltable
//!
//! Read one sheet of an Excel workbook into a table of strings.
//!
//! The result is a [`Table`]: column names taken from a header row and data
//! rows whose values are the cells rendered as text (`None` for blank and
//! error cells). Numbers keep no type, dates use a fixed format, and formulas
//! resolve to the results stored in the file.
//!
//! ## Features
//!
//! - XLSX and XLSM (Office Open XML) and legacy XLS (BIFF8) workbooks
//! - Sheet selection by name or position
//! - Configurable header row, column cap, and empty-row filtering
//! - Duplicate column names renamed with a random suffix, or rejected
//!
//! ## Example
//!
//! ```rust,no_run
//! use xltable::{ReadOptions, TableReader};
//!
//! let options = ReadOptions {
//!     sheet_name: Some("Orders".into()),
//!     header_row_index: 2,
//!     max_columns: Some(10),
//!     ..Default::default()
//! };
//!
//! let table = TableReader::read_file("orders.xlsx", Some(&options)).unwrap();
//! for row in table.rows() {
//!     println!("{:?}", row);
//! }
//! ```

pub mod backend;
pub mod error;
pub mod reader;

pub use backend::{CalamineSheet, CalamineWorkbook, PhysicalRows, XlsWorkbook, XlsxWorkbook};
pub use error::{ReadError, ReadResult};
pub use reader::TableReader;

// Re-export core types
pub use xltable_core::{
    build_table, cell_to_string, CachedResultEvaluator, Cell, CellError, CellValue, Error,
    Format, FormulaEvaluator, MemorySheet, MemoryWorkbook, ReadOptions, Result, Row, Sheet,
    Table, Workbook, DATE_TIME_FORMAT,
};
