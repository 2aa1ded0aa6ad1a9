//! Build live `<table>` elements from table trees.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlTableElement};

use super::{CellNode, RowNode, TableNode};
use crate::error::{Result, SheetmapError};

/// Create one detached `HtmlTableElement` per table.
pub fn build_tables(document: &Document, tables: &[TableNode]) -> Result<Vec<HtmlTableElement>> {
    tables.iter().map(|t| build_table(document, t)).collect()
}

fn build_table(document: &Document, node: &TableNode) -> Result<HtmlTableElement> {
    let table = create::<HtmlTableElement>(document, "table")?;

    if let Some(title) = &node.title {
        table.set_attribute("title", title)?;
    }

    if let Some(cols) = &node.col_group {
        let colgroup = document.create_element("colgroup")?;
        for col in cols {
            let el = create::<HtmlElement>(document, "col")?;
            el.set_attribute("width", &col.width)?;
            el.style().set_property("width", &format!("{}px", col.width))?;
            colgroup.append_child(&el)?;
        }
        table.append_child(&colgroup)?;
    }

    for row in &node.rows {
        table.append_child(&build_row(document, row)?)?;
    }

    if let Some(row) = node.frozen_at_row {
        table.set_attribute("data-frozenatrow", &row.to_string())?;
    }
    if let Some(col) = node.frozen_at_col {
        table.set_attribute("data-frozenatcol", &col.to_string())?;
    }

    Ok(table)
}

fn build_row(document: &Document, node: &RowNode) -> Result<HtmlElement> {
    let tr = create::<HtmlElement>(document, "tr")?;
    tr.set_attribute("height", &node.height)?;
    tr.style()
        .set_property("height", &format!("{}px", node.height))?;
    for cell in &node.cells {
        tr.append_child(&build_cell(document, cell)?)?;
    }
    Ok(tr)
}

fn build_cell(document: &Document, node: &CellNode) -> Result<Element> {
    let td = document.create_element("td")?;
    let attrs = [
        ("class", node.class.clone()),
        ("style", node.style.clone()),
        ("data-formula", node.formula.clone()),
        ("data-celltype", node.cell_type.clone()),
        ("rowspan", node.rowspan.map(|n| n.to_string())),
        ("colspan", node.colspan.map(|n| n.to_string())),
        ("id", node.id.clone()),
    ];
    for (name, value) in attrs {
        if let Some(value) = value {
            td.set_attribute(name, &value)?;
        }
    }
    if let Some(text) = &node.text {
        td.set_inner_html(text);
    }
    Ok(td)
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| SheetmapError::Dom(format!("<{tag}> has an unexpected element type")))
}
