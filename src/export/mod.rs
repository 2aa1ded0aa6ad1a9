//! Rebuild a document from the live state of a host grid.
//!
//! The whole document is rebuilt on every call; nothing is diffed against a
//! previously loaded document.

mod trim;

use crate::config::ExportOptions;
use crate::grid::{GridCell, HostGrid};
use crate::types::{non_empty, Cell, Measure, Row, Sheet, SheetMetadata, SpreadsheetDocument};

/// Export every sheet of `host` as a document.
///
/// Each sheet's pending cell edit is committed first. Rows are trimmed
/// unless `options.keep_empty_rows` is set.
pub fn from_grid<H: HostGrid + ?Sized>(
    host: &mut H,
    options: &ExportOptions,
) -> SpreadsheetDocument {
    let sheets = (0..host.sheet_count())
        .map(|sheet| export_sheet(host, sheet, options))
        .collect();
    SpreadsheetDocument::new(sheets)
}

fn export_sheet<H: HostGrid + ?Sized>(
    host: &mut H,
    sheet: usize,
    options: &ExportOptions,
) -> Sheet {
    host.commit_cell_edit(sheet);
    let grid: &H = host;

    let mut widths = Vec::new();
    let mut rows = Vec::new();
    let row_count = grid.row_count(sheet);

    for row in 1..=row_count {
        let column_count = grid.column_count(sheet, row);
        let Some(cutoff) = trim::row_cutoff(column_count, options.keep_empty_rows, |col| {
            grid.cell(sheet, row, col)
        }) else {
            continue;
        };

        let columns = (1..=cutoff)
            .map(|col| {
                grid.cell(sheet, row, col)
                    .map(|live| export_cell(&live, grid))
                    .unwrap_or_default()
            })
            .collect();

        // Widths are taken from the first grid row only.
        if row == 1 {
            widths = (1..=cutoff)
                .map(|col| {
                    let css = grid.column_width(sheet, col).unwrap_or_default();
                    Measure::Text(css.replacen("px", "", 1))
                })
                .collect();
        }

        let height = grid
            .row_height(sheet, row)
            .map(|h| h.replacen("px", "", 1))
            .filter(|h| !h.is_empty())
            .map_or_else(
                || Measure::from(options.default_row_height),
                Measure::Text,
            );

        rows.push(Row {
            columns: Some(columns),
            height: Some(height),
        });
    }

    log::debug!(
        "exported sheet {sheet}: {} of {row_count} rows kept",
        rows.len()
    );

    Sheet {
        title: grid.title(sheet).unwrap_or_default(),
        rows,
        metadata: Some(SheetMetadata {
            widths: Some(widths),
            frozen_at: Some(grid.frozen_at(sheet)),
        }),
    }
}

/// Copy the present, truthy fields of a live cell.
fn export_cell<H: HostGrid + ?Sized>(live: &GridCell, host: &H) -> Cell {
    let owned = |s: Option<&String>| non_empty(s.map(String::as_str)).map(str::to_string);
    let span = |s: Option<&String>| {
        non_empty(s.map(String::as_str)).and_then(|s| s.trim().parse::<u32>().ok())
    };

    let class_name = live
        .class_attr
        .as_deref()
        .map(|class| host.class_names().strip(class))
        .filter(|class| !class.is_empty());

    Cell {
        formula: owned(live.formula.as_ref()),
        cell_type: owned(live.cell_type.as_ref()),
        value: owned(live.value.as_ref()),
        uneditable: live.uneditable,
        cache: owned(live.cache.as_ref()),
        id: owned(live.id.as_ref()),
        style: owned(live.style_attr.as_ref()),
        class_name,
        rowspan: span(live.rowspan_attr.as_ref()),
        colspan: span(live.colspan_attr.as_ref()),
    }
}
