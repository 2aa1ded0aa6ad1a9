//! Tests for loading documents and querying them through `DocumentMapper`.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetmap::{
    Cell, CellAttribute, DocumentMapper, Measure, Row, Sheet, SheetSize, SizeTarget,
};

fn three_sheets() -> DocumentMapper {
    DocumentMapper::from_json(
        r#"[
            {"title":"A","rows":[
                {"height":18,"columns":[{"value":"1"},{"value":"2"},{"value":"3"}]},
                {"height":18,"columns":[{"formula":"A1*2"}]}
            ]},
            {"title":"B","rows":[]},
            {"title":"A","rows":[{"height":"20","columns":[{"value":"dup"}]}]}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_size_uses_first_row_columns() {
    let m = three_sheets();
    assert_eq!(m.len(), 3);
    assert_eq!(m.size(0), SheetSize { rows: 2, cols: 3 });
    assert_eq!(m.size(1), SheetSize { rows: 0, cols: 0 });
    assert_eq!(m.size(7), SheetSize::default());
}

#[test]
fn test_size_when_first_row_has_no_columns_key() {
    let m = DocumentMapper::from_json(r#"[{"rows":[{"height":18},{"height":18}]}]"#).unwrap();
    assert_eq!(m.size(0), SheetSize { rows: 0, cols: 0 });
    assert!(m.get_cell(0, 1, 1).is_none());
    let tables = m.to_tables();
    assert_eq!(tables[0].rows.len(), 2);
    assert!(tables[0].rows.iter().all(|r| r.cells.is_empty()));

    let m = DocumentMapper::from_json(r#"[{"rows":[{"height":18,"columns":[]}]}]"#).unwrap();
    assert_eq!(m.size(0), SheetSize { rows: 1, cols: 0 });
}

#[test]
fn test_scalar_cell_fields_load_as_text() {
    let m = DocumentMapper::from_json(
        r#"[{"title":2024,"rows":[{"columns":[{"value":42,"cache":true,"uneditable":1}]}]}]"#,
    )
    .unwrap();
    assert_eq!(m.title(0), "2024");
    let cell = m.get_cell(0, 1, 1).unwrap();
    assert_eq!(cell.value.as_deref(), Some("42"));
    assert_eq!(cell.cache.as_deref(), Some("true"));
    assert!(cell.uneditable);
}

#[test]
fn test_title_lookup_returns_first_match() {
    let m = three_sheets();
    assert_eq!(m.sheet_index_by_title("A"), Some(0));
    assert_eq!(m.sheet_index_by_title("B"), Some(1));
    assert_eq!(m.sheet_index_by_title("a"), None);
    assert_eq!(m.title(2), "A");
    assert_eq!(m.title(3), "");
}

#[test]
fn test_get_cell_out_of_range() {
    let m = three_sheets();
    assert_eq!(m.get_cell(0, 1, 3).unwrap().value.as_deref(), Some("3"));
    assert_eq!(m.get_cell(0, 2, 1).unwrap().formula.as_deref(), Some("A1*2"));
    assert!(m.get_cell(0, 2, 2).is_none());
    assert!(m.get_cell(0, 3, 1).is_none());
    assert!(m.get_cell(1, 1, 1).is_none());
}

#[test]
fn test_jit_cell_seeds_from_document() {
    let mut m = three_sheets();
    let computed = m.jit_cell(0, 2, 1).unwrap();
    assert_eq!(computed.formula, "A1*2");
    assert_eq!(computed.value, "");
    assert_eq!(computed.calc_count, 0);
    assert_eq!(computed.calc_last, -1);
    assert_eq!(computed.calc_dependencies_last, -1);
    assert!(computed.dependencies.is_empty());
}

#[test]
fn test_jit_cell_returns_same_record() {
    let mut m = three_sheets();
    {
        let first = m.jit_cell(0, 1, 1).unwrap();
        first.value = "changed".into();
        first.calc_count = 2;
    }
    let second = m.jit_cell(0, 1, 1).unwrap();
    assert_eq!(second.value, "changed");
    assert_eq!(second.calc_count, 2);

    // The document cell itself is untouched.
    assert_eq!(m.get_cell(0, 1, 1).unwrap().value.as_deref(), Some("1"));
}

#[test]
fn test_jit_cell_missing_cell() {
    let mut m = three_sheets();
    assert!(m.jit_cell(0, 0, 1).is_none());
    assert!(m.jit_cell(1, 1, 1).is_none());
    assert!(m.computed_cell(1, 1, 1).is_none());
}

#[test]
fn test_take_computed_resets_memo() {
    let mut m = three_sheets();
    m.jit_cell(0, 1, 2).unwrap().calc_count = 9;
    let taken = m.take_computed(0, 1, 2).unwrap();
    assert_eq!(taken.calc_count, 9);
    assert_eq!(m.jit_cell(0, 1, 2).unwrap().calc_count, 0);
}

#[test]
fn test_add_spreadsheet_appends() {
    let mut m = three_sheets();
    m.add_spreadsheet(Sheet::titled("C"), None);
    assert_eq!(m.len(), 4);
    assert_eq!(m.sheet_index_by_title("C"), Some(3));
}

#[test]
fn test_add_spreadsheet_inserts_and_shifts() {
    let mut m = three_sheets();
    m.jit_cell(2, 1, 1).unwrap().calc_count = 4;
    m.add_spreadsheet(Sheet::titled("front"), Some(1));

    assert_eq!(m.len(), 4);
    assert_eq!(m.title(0), "A");
    assert_eq!(m.title(1), "front");
    assert_eq!(m.title(2), "B");
    assert_eq!(m.title(3), "A");

    let moved = m.computed_cell(3, 1, 1).unwrap();
    assert_eq!(moved.calc_count, 4);
    assert_eq!(moved.coord.sheet, 3);
    assert!(m.computed_cell(2, 1, 1).is_none());
}

#[test]
fn test_set_cell_attribute_on_detached_cell() {
    let mut cell = Cell::default();
    DocumentMapper::set_cell_attribute(&mut cell, CellAttribute::Formula("B2".into()));
    DocumentMapper::set_cell_attribute(&mut cell, CellAttribute::Colspan(2));
    assert_eq!(cell.formula.as_deref(), Some("B2"));
    assert_eq!(cell.colspan, Some(2));
}

#[test]
fn test_row_height_is_zero_based() {
    let m = three_sheets();
    assert_eq!(m.row_height(0, 0).as_deref(), Some("18px"));
    assert_eq!(m.row_height(2, 0).as_deref(), Some("20px"));
    assert!(m.row_height(0, 2).is_none());
}

#[test]
fn test_set_width_without_metadata_is_noop() {
    struct Col(Option<String>);
    impl SizeTarget for Col {
        fn set_width(&mut self, css: &str) {
            self.0 = Some(css.to_string());
        }
        fn set_height(&mut self, _css: &str) {}
    }

    let m = three_sheets();
    let mut col = Col(None);
    m.set_width(0, 0, &mut col);
    assert!(col.0.is_none());
}

#[test]
fn test_document_serializes_back() {
    let mut m = DocumentMapper::default();
    m.add_spreadsheet(
        Sheet {
            title: "S".into(),
            rows: vec![Row::new(vec![Cell::with_value("x")]).with_height(Measure::from("18"))],
            metadata: None,
        },
        None,
    );
    assert_eq!(
        m.to_json().unwrap(),
        r#"[{"title":"S","rows":[{"columns":[{"value":"x"}],"height":"18"}]}]"#
    );
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(DocumentMapper::from_json("{not json").is_err());
    assert!(DocumentMapper::from_json(r#"{"title":"not an array"}"#).is_err());
}
