//! Workbook to table reader

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use xltable_core::{build_table, Format, ReadOptions, Table};

use crate::backend::{XlsWorkbook, XlsxWorkbook};
use crate::error::ReadResult;

/// Reads one sheet of a workbook into a [`Table`]
pub struct TableReader;

impl TableReader {
    /// Read a workbook file.
    ///
    /// The file is opened read-only and closed before this returns.
    /// `None` options means defaults; given options are validated first.
    pub fn read_file<P: AsRef<Path>>(path: P, options: Option<&ReadOptions>) -> ReadResult<Table> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(xltable_core::Error::argument("path", "path is empty").into());
        }

        let options = ReadOptions::resolve(options)?;
        let file = File::open(path)?;
        Self::read_resolved(BufReader::new(file), &options)
    }

    /// Read a workbook held in memory
    pub fn read_bytes(bytes: &[u8], options: Option<&ReadOptions>) -> ReadResult<Table> {
        if bytes.is_empty() {
            return Err(xltable_core::Error::argument("bytes", "no workbook data").into());
        }

        let options = ReadOptions::resolve(options)?;
        Self::read_resolved(Cursor::new(bytes), &options)
    }

    /// Read a workbook from any seekable source
    pub fn read<R: Read + Seek>(reader: R, options: Option<&ReadOptions>) -> ReadResult<Table> {
        let options = ReadOptions::resolve(options)?;
        Self::read_resolved(reader, &options)
    }

    fn read_resolved<R: Read + Seek>(reader: R, options: &ReadOptions) -> ReadResult<Table> {
        log::debug!("opening {} workbook", options.format);

        match options.format {
            Format::Xlsx | Format::Xlsm => {
                let mut workbook = XlsxWorkbook::open(reader)?;
                build_table(&mut workbook, options)
            }
            Format::Xls => {
                let mut workbook = XlsWorkbook::open(reader)?;
                build_table(&mut workbook, options)
            }
        }
    }
}
