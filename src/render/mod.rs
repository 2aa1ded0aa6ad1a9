//! Table rendering.
//!
//! This module provides:
//! - A backend-agnostic table tree built from a document ([`to_tables`])
//! - An HTML text writer ([`write_html`])
//! - A `web-sys` DOM builder (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
mod html;

pub use html::write_html;

use serde::Serialize;

use crate::types::{non_empty, non_zero, Cell, Row, Sheet, SpreadsheetDocument};

/// One `<table>` per sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableNode {
    pub title: Option<String>,
    pub frozen_at_row: Option<u32>,
    pub frozen_at_col: Option<u32>,
    /// Leading `<colgroup>`, present whenever the sheet declares widths
    pub col_group: Option<Vec<ColNode>>,
    pub rows: Vec<RowNode>,
}

/// A `<col>`; `width` is a bare number written as attribute and `Npx` style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColNode {
    pub width: String,
}

/// A `<tr>`; `height` is a bare number written as attribute and `Npx` style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowNode {
    pub height: String,
    pub cells: Vec<CellNode>,
}

/// A `<td>` with the attributes and text the grid reads back when loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellNode {
    pub class: Option<String>,
    pub style: Option<String>,
    /// `data-formula`, with the leading `=`
    pub formula: Option<String>,
    /// `data-celltype`
    pub cell_type: Option<String>,
    pub rowspan: Option<u32>,
    pub colspan: Option<u32>,
    pub id: Option<String>,
    /// Inner markup
    pub text: Option<String>,
}

/// Build one table per sheet.
#[must_use]
pub fn to_tables(document: &SpreadsheetDocument) -> Vec<TableNode> {
    document.sheets.iter().map(sheet_table).collect()
}

fn sheet_table(sheet: &Sheet) -> TableNode {
    let mut table = TableNode {
        title: non_empty(Some(sheet.title.as_str())).map(str::to_string),
        rows: sheet.rows.iter().filter_map(row_node).collect(),
        ..TableNode::default()
    };

    if let Some(widths) = sheet.widths() {
        table.col_group = Some(
            widths
                .iter()
                .map(|w| ColNode {
                    width: w.attr_value(),
                })
                .collect(),
        );
    }

    if let Some(frozen) = sheet.frozen_at() {
        table.frozen_at_row = non_zero(Some(frozen.row));
        table.frozen_at_col = non_zero(Some(frozen.col));
    }

    table
}

/// A row with no usable height produces no `<tr>`, and its cells go with it.
fn row_node(row: &Row) -> Option<RowNode> {
    let height = row.height.as_ref().filter(|h| !h.is_blank())?;
    Some(RowNode {
        height: height.attr_value(),
        cells: row.cells().iter().map(cell_node).collect(),
    })
}

fn cell_node(cell: &Cell) -> CellNode {
    let mut node = CellNode {
        class: non_empty(cell.class_name.as_deref()).map(str::to_string),
        style: non_empty(cell.style.as_deref()).map(str::to_string),
        formula: cell.formula_text().map(|f| format!("={f}")),
        cell_type: non_empty(cell.cell_type.as_deref()).map(str::to_string),
        rowspan: non_zero(cell.rowspan),
        colspan: non_zero(cell.colspan),
        id: non_empty(cell.id.as_deref()).map(str::to_string),
        text: None,
    };

    // Later sources overwrite earlier ones: value, then uneditable, then cache.
    if let Some(value) = cell.value_text() {
        node.text = Some(value.to_string());
    }
    if cell.uneditable {
        node.text = Some(cell.uneditable.to_string());
    }
    if let Some(cache) = non_empty(cell.cache.as_deref()) {
        node.text = Some(cache.to_string());
    }

    node
}
