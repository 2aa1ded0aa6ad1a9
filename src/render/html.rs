//! HTML text output for table trees.

use std::fmt::Write;

use super::{CellNode, RowNode, TableNode};

/// Write tables as HTML.
///
/// Attribute values are escaped. Cell text is written as markup, the same
/// way the grid assigns it through `innerHTML`.
#[must_use]
pub fn write_html(tables: &[TableNode]) -> String {
    let mut out = String::new();
    for table in tables {
        write_table(&mut out, table);
    }
    out
}

fn write_table(out: &mut String, table: &TableNode) {
    out.push_str("<table");
    attr(out, "title", table.title.as_deref());
    attr(
        out,
        "data-frozenatrow",
        table.frozen_at_row.map(|r| r.to_string()).as_deref(),
    );
    attr(
        out,
        "data-frozenatcol",
        table.frozen_at_col.map(|c| c.to_string()).as_deref(),
    );
    out.push('>');

    if let Some(cols) = &table.col_group {
        out.push_str("<colgroup>");
        for col in cols {
            out.push_str("<col");
            attr(out, "width", Some(&col.width));
            attr(out, "style", Some(&format!("width: {}px;", col.width)));
            out.push('>');
        }
        out.push_str("</colgroup>");
    }

    for row in &table.rows {
        write_row(out, row);
    }
    out.push_str("</table>");
}

fn write_row(out: &mut String, row: &RowNode) {
    out.push_str("<tr");
    attr(out, "height", Some(&row.height));
    attr(out, "style", Some(&format!("height: {}px;", row.height)));
    out.push('>');
    for cell in &row.cells {
        write_cell(out, cell);
    }
    out.push_str("</tr>");
}

fn write_cell(out: &mut String, cell: &CellNode) {
    out.push_str("<td");
    attr(out, "class", cell.class.as_deref());
    attr(out, "style", cell.style.as_deref());
    attr(out, "data-formula", cell.formula.as_deref());
    attr(out, "data-celltype", cell.cell_type.as_deref());
    attr(out, "rowspan", cell.rowspan.map(|n| n.to_string()).as_deref());
    attr(out, "colspan", cell.colspan.map(|n| n.to_string()).as_deref());
    attr(out, "id", cell.id.as_deref());
    out.push('>');
    if let Some(text) = &cell.text {
        out.push_str(text);
    }
    out.push_str("</td>");
}

fn attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
}

/// Minimal escaping for double-quoted attribute values.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
