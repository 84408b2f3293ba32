//! Workbook backend built on calamine.
//!
//! One [`CalamineWorkbook`] type serves both container formats; the format is
//! fixed by the calamine reader it wraps ([`XlsxWorkbook`] for zipped XML,
//! [`XlsWorkbook`] for BIFF). Sheets are loaded whole, together with their
//! formula text, and handed to the pipeline row by row.
//!
//! Value ranges only cover cells that hold a value. Rows that carry nothing
//! but formatting still count towards a sheet's extent, so each reader also
//! reports the last physical row it can see ([`PhysicalRows`]).

use std::io::{Read, Seek};
use std::marker::PhantomData;

use calamine::{CellErrorType, Data, Dimensions, Range, Reader, Xls, XlsError, Xlsx, XlsxError};
use chrono::{NaiveDate, NaiveDateTime};
use xltable_core::{CachedResultEvaluator, Cell, CellError, CellValue, Row, Sheet, Workbook};

use crate::error::{ReadError, ReadResult};

/// Workbook over an XLSX or XLSM source
pub type XlsxWorkbook<RS> = CalamineWorkbook<RS, Xlsx<RS>>;

/// Workbook over a legacy XLS source
pub type XlsWorkbook<RS> = CalamineWorkbook<RS, Xls<RS>>;

/// A workbook opened through a calamine reader
pub struct CalamineWorkbook<RS, R> {
    reader: R,
    _source: PhantomData<RS>,
}

impl<RS, R> CalamineWorkbook<RS, R>
where
    RS: Read + Seek,
    R: Reader<RS> + PhysicalRows,
    ReadError: From<R::Error>,
{
    /// Parse the workbook container from `source`
    pub fn open(source: RS) -> ReadResult<Self> {
        Ok(Self {
            reader: R::new(source)?,
            _source: PhantomData,
        })
    }

    fn load_sheet(&mut self, name: &str) -> ReadResult<CalamineSheet> {
        let values = self.reader.worksheet_range(name)?;

        // Formula text is best effort; stored values still convert without it
        let formulas = match self.reader.worksheet_formula(name) {
            Ok(formulas) => formulas,
            Err(e) => {
                log::warn!("failed to read formulas for sheet `{name}`: {e:?}");
                Range::empty()
            }
        };

        let physical_last_row = match self.reader.last_physical_row(name) {
            Ok(row) => row,
            Err(e) => {
                log::warn!("failed to scan rows of sheet `{name}`: {e}");
                None
            }
        };

        Ok(CalamineSheet::new(name, values, formulas, physical_last_row))
    }
}

/// Readers that can see rows holding cells without values
pub trait PhysicalRows {
    /// Error raised while scanning the sheet
    type ScanError: std::fmt::Display;

    /// Last row index holding any cell element, formatted-only cells
    /// included. `None` when the reader knows no more than its value range.
    fn last_physical_row(&mut self, name: &str) -> Result<Option<u32>, Self::ScanError>;
}

impl<RS: Read + Seek> PhysicalRows for Xlsx<RS> {
    type ScanError = XlsxError;

    fn last_physical_row(&mut self, name: &str) -> Result<Option<u32>, XlsxError> {
        let mut cells = self.worksheet_cells_reader(name)?;

        let declared = cells.dimensions();
        let mut last = (declared != Dimensions::default()).then_some(declared.end.0);

        // Styled empty cells come back as `DataRef::Empty`
        while let Some(cell) = cells.next_cell()? {
            let (row, _) = cell.get_position();
            last = last.max(Some(row));
        }

        Ok(last)
    }
}

impl<RS: Read + Seek> PhysicalRows for Xls<RS> {
    type ScanError = XlsError;

    // BIFF blank records are not exposed by the parser
    fn last_physical_row(&mut self, _name: &str) -> Result<Option<u32>, XlsError> {
        Ok(None)
    }
}

impl<RS, R> Workbook for CalamineWorkbook<RS, R>
where
    RS: Read + Seek,
    R: Reader<RS> + PhysicalRows,
    ReadError: From<R::Error>,
{
    type Sheet = CalamineSheet;
    type Evaluator = CachedResultEvaluator;
    type Error = ReadError;

    fn sheet_names(&self) -> Vec<String> {
        self.reader.sheet_names()
    }

    fn sheet_by_name(&mut self, name: &str) -> ReadResult<Option<CalamineSheet>> {
        if !self.reader.sheet_names().iter().any(|n| n == name) {
            return Ok(None);
        }
        self.load_sheet(name).map(Some)
    }

    fn sheet_at(&mut self, index: usize) -> ReadResult<CalamineSheet> {
        let names = self.reader.sheet_names();
        let name = names
            .get(index)
            .ok_or(xltable_core::Error::SheetIndexOutOfRange {
                index,
                count: names.len(),
            })?;
        self.load_sheet(name)
    }

    fn formula_evaluator(&self) -> CachedResultEvaluator {
        CachedResultEvaluator
    }
}

/// A sheet loaded from a calamine reader
#[derive(Debug, Clone)]
pub struct CalamineSheet {
    name: String,
    values: Range<Data>,
    formulas: Range<String>,
    last_row: Option<u32>,
}

impl CalamineSheet {
    fn new(
        name: &str,
        values: Range<Data>,
        formulas: Range<String>,
        physical_last_row: Option<u32>,
    ) -> Self {
        let mut sheet = Self {
            name: name.to_owned(),
            values,
            formulas,
            last_row: None,
        };
        sheet.last_row = sheet.last_value_row_index().max(physical_last_row);
        sheet
    }

    fn first_row_index(&self) -> Option<u32> {
        [self.values.start(), self.formulas.start()]
            .into_iter()
            .flatten()
            .map(|(row, _)| row)
            .min()
    }

    fn last_value_row_index(&self) -> Option<u32> {
        [self.values.end(), self.formulas.end()]
            .into_iter()
            .flatten()
            .map(|(row, _)| row)
            .max()
    }

    fn last_column_index(&self) -> Option<u32> {
        [self.values.end(), self.formulas.end()]
            .into_iter()
            .flatten()
            .map(|(_, col)| col)
            .max()
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        let mut cell = self
            .values
            .get_value((row, col))
            .map_or_else(Cell::blank, convert_data);

        if let Some(text) = self.formulas.get_value((row, col)) {
            if !text.is_empty() {
                let cached = std::mem::take(&mut cell.value);
                cell.value = CellValue::formula_with_result(text.as_str(), cached);
            }
        }

        cell
    }
}

impl Sheet for CalamineSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row_index(&self) -> Option<u32> {
        self.last_row
    }

    /// Rows outside the value range, formatted-only rows included, are absent
    fn row(&self, index: u32) -> Option<Row> {
        let first = self.first_row_index()?;
        let last = self.last_value_row_index()?;
        if index < first || index > last {
            return None;
        }

        let last_col = self.last_column_index()?;
        let cells = (0..=last_col).map(|col| self.cell(index, col)).collect();
        Some(Row::new(index, cells))
    }
}

fn convert_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::blank(),
        Data::Int(i) => Cell::new(*i),
        Data::Float(f) => Cell::new(*f),
        Data::String(s) => Cell::new(s.as_str()),
        Data::Bool(b) => Cell::new(*b),
        Data::Error(e) => Cell::new(convert_error(e)),
        Data::DateTime(dt) => {
            let cell = Cell::new(dt.as_f64());
            match dt.as_datetime() {
                Some(date) if dt.is_datetime() => cell.with_date_value(date),
                _ => cell,
            }
        }
        Data::DateTimeIso(s) => parse_iso_datetime(s).map_or_else(|| Cell::new(s.as_str()), Cell::date),
        Data::DurationIso(s) => Cell::new(s.as_str()),
    }
}

fn convert_error(e: &CellErrorType) -> CellError {
    match e {
        CellErrorType::Div0 => CellError::Div0,
        CellErrorType::NA => CellError::Na,
        CellErrorType::Name => CellError::Name,
        CellErrorType::Null => CellError::Null,
        CellErrorType::Num => CellError::Num,
        CellErrorType::Ref => CellError::Ref,
        CellErrorType::Value => CellError::Value,
        CellErrorType::GettingData => CellError::GettingData,
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok()?.and_hms_opt(0, 0, 0))
}
