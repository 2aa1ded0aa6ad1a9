//! [`HostGrid`] over a JavaScript grid object.
//!
//! The grid exposes:
//!
//! | method | returns |
//! |---|---|
//! | `sheetCount()` | number of sheets |
//! | `commitCellEdit(sheet)` | - |
//! | `title(sheet)` | the table's `title` attribute, or `null` |
//! | `frozenAt(sheet)` | `{row, col}` or `null` |
//! | `rowCount(sheet)` / `columnCount(sheet, row)` | highest 1-based index |
//! | `cell(sheet, row, col)` | `{formula, value, cellType, uneditable, cache, id, class, style, rowspan, colspan}` or `null` |
//! | `rowHeight(sheet, row)` / `columnWidth(sheet, col)` | CSS length or `null` |
//! | `classNames()` (optional) | `{cellActive, cellHighlighted}` |

use wasm_bindgen::JsValue;

use super::{GridCell, HostGrid};
use crate::config::GridClasses;
use crate::js::{call, call_as};
use crate::types::FrozenAt;

/// A JS grid object read through its methods.
pub struct JsHostGrid {
    grid: JsValue,
    classes: GridClasses,
}

impl JsHostGrid {
    /// Wrap `grid`, reading its transient class names once.
    #[must_use]
    pub fn new(grid: JsValue) -> Self {
        let classes = call_as(&grid, "classNames", &[]).unwrap_or_default();
        Self { grid, classes }
    }

    fn sheet_arg(sheet: usize) -> JsValue {
        // Sheet indexes stay far below 2^53.
        #[allow(clippy::cast_precision_loss)]
        JsValue::from_f64(sheet as f64)
    }

    /// A non-negative count; anything else reads as 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn count(&self, method: &str, args: &[JsValue]) -> u32 {
        match call(&self.grid, method, args).as_f64() {
            Some(n) if n.is_finite() && n > 0.0 => n.min(f64::from(u32::MAX)) as u32,
            _ => 0,
        }
    }
}

impl HostGrid for JsHostGrid {
    fn sheet_count(&self) -> usize {
        self.count("sheetCount", &[]) as usize
    }

    fn commit_cell_edit(&mut self, sheet: usize) {
        call(&self.grid, "commitCellEdit", &[Self::sheet_arg(sheet)]);
    }

    fn title(&self, sheet: usize) -> Option<String> {
        call(&self.grid, "title", &[Self::sheet_arg(sheet)]).as_string()
    }

    fn frozen_at(&self, sheet: usize) -> FrozenAt {
        call_as(&self.grid, "frozenAt", &[Self::sheet_arg(sheet)]).unwrap_or_default()
    }

    fn row_count(&self, sheet: usize) -> u32 {
        self.count("rowCount", &[Self::sheet_arg(sheet)])
    }

    fn column_count(&self, sheet: usize, row: u32) -> u32 {
        self.count("columnCount", &[Self::sheet_arg(sheet), JsValue::from(row)])
    }

    fn cell(&self, sheet: usize, row: u32, col: u32) -> Option<GridCell> {
        call_as(
            &self.grid,
            "cell",
            &[Self::sheet_arg(sheet), JsValue::from(row), JsValue::from(col)],
        )
    }

    fn row_height(&self, sheet: usize, row: u32) -> Option<String> {
        call(&self.grid, "rowHeight", &[Self::sheet_arg(sheet), JsValue::from(row)]).as_string()
    }

    fn column_width(&self, sheet: usize, col: u32) -> Option<String> {
        call(&self.grid, "columnWidth", &[Self::sheet_arg(sheet), JsValue::from(col)])
            .as_string()
    }

    fn class_names(&self) -> &GridClasses {
        &self.classes
    }
}
