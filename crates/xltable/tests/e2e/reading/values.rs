//! Tests for how cell values render: dates, booleans, errors, formulas,
//! and header cells that are not plain text.

use pretty_assertions::assert_eq;
use xltable::TableReader;

use crate::{formula, is_suffixed, strs, values, xlsx_bytes, FixtureSheet, Fx};

/// 2021-08-28 as a 1900-system serial
const AUG_28_2021: f64 = 44436.0;

#[test]
fn test_dates_render_with_fixed_format() {
    let bytes = xlsx_bytes(&[FixtureSheet::new("Sheet1")
        .row(0, strs(&["When"]))
        .row(1, vec![Fx::Date(AUG_28_2021)])
        .row(2, vec![Fx::Date(AUG_28_2021 + 0.5)])]);

    let table = TableReader::read_bytes(&bytes, None).unwrap();
    assert_eq!(
        table.rows(),
        [
            values(&["2021-08-28 00:00:00"]),
            values(&["2021-08-28 12:00:00"]),
        ]
    );
}

#[test]
fn test_booleans_and_errors() {
    let bytes = xlsx_bytes(&[FixtureSheet::new("Sheet1")
        .row(0, strs(&["Flag", "Broken", "Text"]))
        .row(1, vec![Fx::Bool(true), Fx::Err("#DIV/0!"), Fx::Str("ok")])
        .row(2, vec![Fx::Bool(false), Fx::Err("#N/A"), Fx::Str("fine")])]);

    let table = TableReader::read_bytes(&bytes, None).unwrap();
    assert_eq!(
        table.rows(),
        [
            vec![Some("true".to_string()), None, Some("ok".to_string())],
            vec![Some("false".to_string()), None, Some("fine".to_string())],
        ]
    );
}

#[test]
fn test_formulas_resolve_to_stored_results() {
    let bytes = xlsx_bytes(&[FixtureSheet::new("Sheet1")
        .row(0, strs(&["Sum", "Label", "Check", "Ratio", "Due"]))
        .row(
            1,
            vec![
                formula("1+2", Fx::Num(3.0)),
                formula("\"a\"&\"b\"", Fx::Str("ab")),
                formula("1<2", Fx::Bool(true)),
                formula("1/0", Fx::Err("#DIV/0!")),
                formula("DATE(2021,8,28)", Fx::Date(AUG_28_2021)),
            ],
        )]);

    let table = TableReader::read_bytes(&bytes, None).unwrap();
    assert_eq!(
        table.rows(),
        [vec![
            Some("3".to_string()),
            Some("ab".to_string()),
            Some("true".to_string()),
            None,
            Some("2021-08-28 00:00:00".to_string()),
        ]]
    );
}

#[test]
fn test_known_edge_cases() {
    let header = vec![
        Fx::Skip,
        Fx::Str("B"),
        Fx::Str("B"),
        Fx::Str("  C  "),
        Fx::Skip,
        Fx::Str("D"),
        Fx::Bool(true),
        Fx::Num(1.0),
        Fx::Date(AUG_28_2021),
        formula("10+2.56", Fx::Num(12.56)),
    ];
    let bytes = xlsx_bytes(&[
        FixtureSheet::new("Hidden")
            .hidden()
            .row(0, strs(&["Secret"]))
            .row(1, strs(&["x"])),
        FixtureSheet::new("Visible")
            .row(0, header)
            .row(1, strs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]))
            .row(3, vec![Fx::Skip, Fx::Skip, Fx::Skip, Fx::Num(1.0)]),
    ]);

    let table = TableReader::read_bytes(&bytes, None).unwrap();

    // Hidden sheets count when picking the first sheet
    assert_eq!(table.name(), "Hidden");

    let options = xltable::ReadOptions {
        sheet_name: Some("Visible".into()),
        ..Default::default()
    };
    let table = TableReader::read_bytes(&bytes, Some(&options)).unwrap();

    let columns = table.columns();
    assert_eq!(columns.len(), 10);
    assert_eq!(columns[0], "Column1");
    assert_eq!(columns[1], "B");
    assert!(is_suffixed(&columns[2], "B"), "got {}", columns[2]);
    assert_eq!(
        &columns[3..],
        ["C", "Column2", "D", "true", "1", "2021-08-28 00:00:00", "12.56"]
    );

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(0, "Column1"), Some("a"));
    assert_eq!(table.value(0, "12.56"), Some("j"));
    assert_eq!(table.value(1, "C"), Some("1"));
    assert_eq!(table.value(1, "D"), None);
}
