//! End-to-end tests for xltable.
//!
//! Each test builds the workbook it needs in memory (XLSX or XLS),
//! reads it back with `TableReader`, and asserts on the resulting table.
//! No external tools or fixture files are required.


// Re-export common utilities for submodules
pub use common::*;
