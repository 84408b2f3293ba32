//! Tests for the input surfaces: paths, byte buffers, and readers.

use std::io::{Cursor, Write};

use pretty_assertions::assert_eq;
use xltable::{Error, Format, ReadError, ReadOptions, TableReader};

use crate::{strs, values, xlsx_bytes, FixtureSheet};

fn small_workbook() -> Vec<u8> {
    xlsx_bytes(&[FixtureSheet::new("Sheet1")
        .row(0, strs(&["A", "B"]))
        .row(1, strs(&["1", "2"]))])
}

#[test]
fn test_read_file() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(&small_workbook()).unwrap();
    file.flush().unwrap();

    let table = TableReader::read_file(file.path(), None).unwrap();
    assert_eq!(table.columns(), ["A", "B"]);
    assert_eq!(table.rows(), [values(&["1", "2"])]);
}

#[test]
fn test_read_xlsm_file() {
    let mut file = tempfile::Builder::new().suffix(".xlsm").tempfile().unwrap();
    file.write_all(&small_workbook()).unwrap();
    file.flush().unwrap();

    let options = ReadOptions {
        format: Format::Xlsm,
        ..Default::default()
    };
    let table = TableReader::read_file(file.path(), Some(&options)).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_read_from_reader() {
    let table = TableReader::read(Cursor::new(small_workbook()), None).unwrap();
    assert_eq!(table.rows(), [values(&["1", "2"])]);
}

#[test]
fn test_empty_path_is_argument_error() {
    let err = TableReader::read_file("", None).unwrap_err();
    assert!(matches!(
        err.as_core(),
        Some(Error::Argument { name: "path", .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TableReader::read_file(dir.path().join("missing.xlsx"), None).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}

#[test]
fn test_empty_bytes_are_argument_error() {
    let err = TableReader::read_bytes(&[], None).unwrap_err();
    assert!(matches!(
        err.as_core(),
        Some(Error::Argument { name: "bytes", .. })
    ));
}

#[test]
fn test_invalid_bytes_are_parse_error() {
    let err = TableReader::read_bytes(b"definitely not a zip archive", None).unwrap_err();
    assert!(matches!(err, ReadError::Xlsx(_)), "got {err:?}");
}

#[test]
fn test_format_mismatch_is_parse_error() {
    let options = ReadOptions {
        format: Format::Xls,
        ..Default::default()
    };
    let err = TableReader::read_bytes(&small_workbook(), Some(&options)).unwrap_err();
    assert!(matches!(err, ReadError::Xls(_)), "got {err:?}");
}

#[test]
fn test_options_validated_before_file_is_opened() {
    let options = ReadOptions {
        max_columns: Some(0),
        ..Default::default()
    };
    let err = TableReader::read_file("does-not-exist.xlsx", Some(&options)).unwrap_err();
    assert!(matches!(err.as_core(), Some(Error::InvalidOption(_))));
}
