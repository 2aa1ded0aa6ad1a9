//! Tests for rendering documents as table trees and HTML.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetmap::render::{to_tables, write_html, CellNode};
use sheetmap::{DocumentMapper, SpreadsheetDocument};

fn doc(json: &str) -> SpreadsheetDocument {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_one_table_per_sheet() {
    let tables = to_tables(&doc(r#"[{"title":"One"},{"title":"Two"},{}]"#));
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].title.as_deref(), Some("One"));
    assert_eq!(tables[1].title.as_deref(), Some("Two"));
    assert!(tables[2].title.is_none());
    assert!(tables.iter().all(|t| t.rows.is_empty()));
}

#[test]
fn test_empty_document_renders_nothing() {
    assert!(to_tables(&SpreadsheetDocument::default()).is_empty());
    assert_eq!(write_html(&[]), "");
}

#[test]
fn test_cell_attributes() {
    let tables = to_tables(&doc(
        r#"[{"rows":[{"height":18,"columns":[
            {"formula":"A1+B1","cellType":"currency","class":"bold","style":"color:red",
             "rowspan":2,"colspan":"3","id":"total","value":"5"}
        ]}]}]"#,
    ));
    let cell = &tables[0].rows[0].cells[0];
    assert_eq!(
        cell,
        &CellNode {
            class: Some("bold".into()),
            style: Some("color:red".into()),
            formula: Some("=A1+B1".into()),
            cell_type: Some("currency".into()),
            rowspan: Some(2),
            colspan: Some(3),
            id: Some("total".into()),
            text: Some("5".into()),
        }
    );
}

#[test]
fn test_empty_and_zero_attributes_are_omitted() {
    let tables = to_tables(&doc(
        r#"[{"rows":[{"height":18,"columns":[
            {"formula":"","class":"","style":"","rowspan":0,"colspan":"0","id":"","value":""}
        ]}]}]"#,
    ));
    assert_eq!(tables[0].rows[0].cells[0], CellNode::default());
}

#[test]
fn test_text_precedence() {
    let tables = to_tables(&doc(
        r#"[{"rows":[{"height":18,"columns":[
            {"value":"v"},
            {"value":"v","uneditable":true},
            {"value":"v","uneditable":true,"cache":"c"},
            {"value":"v","cache":"c"},
            {"cache":""}
        ]}]}]"#,
    ));
    let texts: Vec<Option<&str>> = tables[0].rows[0]
        .cells
        .iter()
        .map(|c| c.text.as_deref())
        .collect();
    assert_eq!(
        texts,
        vec![Some("v"), Some("true"), Some("c"), Some("c"), None]
    );
}

#[test]
fn test_rows_without_usable_height_are_skipped() {
    let tables = to_tables(&doc(
        r#"[{"rows":[
            {"height":18,"columns":[{"value":"kept"}]},
            {"columns":[{"value":"no height"}]},
            {"height":"","columns":[{"value":"empty height"}]},
            {"height":"0","columns":[{"value":"zero height"}]},
            {"height":"22px","columns":[{"value":"also kept"}]}
        ]}]"#,
    ));
    let rows = &tables[0].rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[0].text.as_deref(), Some("kept"));
    assert_eq!(rows[1].height, "22");
    assert_eq!(rows[1].cells[0].text.as_deref(), Some("also kept"));
}

#[test]
fn test_widths_render_col_group() {
    let tables = to_tables(&doc(
        r#"[{"metadata":{"widths":[120,"80","64px"]},"rows":[]},
            {"metadata":{"widths":[]},"rows":[]},
            {"metadata":{},"rows":[]}]"#,
    ));
    let widths: Vec<&str> = tables[0]
        .col_group
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| c.width.as_str())
        .collect();
    assert_eq!(widths, vec!["120", "80", "64"]);
    assert_eq!(tables[1].col_group.as_ref().map(Vec::len), Some(0));
    assert!(tables[2].col_group.is_none());
}

#[test]
fn test_frozen_pane_attributes() {
    let tables = to_tables(&doc(
        r#"[{"metadata":{"frozenAt":{"row":1,"col":2}}},
            {"metadata":{"frozenAt":{"row":0,"col":3}}},
            {"metadata":{"frozenAt":{}}}]"#,
    ));
    assert_eq!(tables[0].frozen_at_row, Some(1));
    assert_eq!(tables[0].frozen_at_col, Some(2));
    assert_eq!(tables[1].frozen_at_row, None);
    assert_eq!(tables[1].frozen_at_col, Some(3));
    assert_eq!(tables[2].frozen_at_row, None);
    assert_eq!(tables[2].frozen_at_col, None);
}

#[test]
fn test_html_output() {
    let m = DocumentMapper::from_json(
        r#"[{"title":"Q1 \"draft\"","metadata":{"widths":[100],"frozenAt":{"row":1,"col":0}},
             "rows":[{"height":18,"columns":[{"formula":"A2","class":"b"}]}]}]"#,
    )
    .unwrap();
    let html = m.to_html();
    assert!(html.starts_with("<table title=\"Q1 &quot;draft&quot;\" data-frozenatrow=\"1\">"));
    assert!(html.contains("<col width=\"100\" style=\"width: 100px;\">"));
    assert!(html.contains("<tr height=\"18\" style=\"height: 18px;\">"));
    assert!(html.contains("<td class=\"b\" data-formula=\"=A2\"></td>"));
    assert!(html.ends_with("</table>"));
}

#[test]
fn test_html_cell_text_is_markup() {
    let html = write_html(&to_tables(&doc(
        r#"[{"rows":[{"height":18,"columns":[{"value":"<b>bold</b>"}]}]}]"#,
    )));
    assert!(html.contains("<td><b>bold</b></td>"));
}
