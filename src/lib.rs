//! sheetmap - spreadsheet documents for browser grids
//!
//! Moves a spreadsheet collection between its JSON form and a table grid:
//! - Load a JSON document and render one `<table>` per sheet
//! - Export a live grid back to JSON, trimming empty trailing rows and columns
//! - Lazily built per-cell evaluation records ("computed cells")
//! - An in-place cell editor that floats a textarea over the active cell
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SheetLoader, InPlaceEdit } from 'sheetmap';
//! await init();
//! const loader = new SheetLoader(json);
//! container.innerHTML = loader.toHtml();
//! const saved = loader.fromSheet(grid);
//! const editor = new InPlaceEdit(grid);
//! editor.open(null, true);
//! ```

pub mod computed;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod grid;
#[cfg(target_arch = "wasm32")]
mod js;
pub mod mapper;
pub mod render;
pub mod types;

use wasm_bindgen::prelude::*;

pub use computed::{CellCoord, ComputedCell};
pub use config::{EditorClasses, ExportOptions, GridClasses};
pub use mapper::{CellSetup, DocumentMapper, SheetSize, SizeTarget};
pub use types::*;

/// A loaded document, exported to JavaScript.
#[wasm_bindgen]
pub struct SheetLoader {
    mapper: DocumentMapper,
}

#[wasm_bindgen]
impl SheetLoader {
    /// Load a document from JSON text. An empty string loads an empty document.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<SheetLoader, JsValue> {
        console_error_panic_hook::set_once();
        let mapper = if json.trim().is_empty() {
            DocumentMapper::default()
        } else {
            DocumentMapper::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(SheetLoader { mapper })
    }

    /// Number of sheets.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.mapper.len()
    }

    /// `{rows, cols}` of a sheet.
    #[wasm_bindgen]
    pub fn size(&self, sheet: usize) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.mapper.size(sheet))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn title(&self, sheet: usize) -> String {
        self.mapper.title(sheet).to_string()
    }

    /// Index of the first sheet with this title, or -1.
    #[wasm_bindgen(js_name = getSpreadsheetIndexByTitle)]
    pub fn sheet_index_by_title(&self, title: &str) -> i32 {
        self.mapper
            .sheet_index_by_title(title)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Column width as CSS (`"120px"`), if declared.
    #[wasm_bindgen(js_name = columnWidth)]
    pub fn column_width(&self, sheet: usize, column: usize) -> Option<String> {
        self.mapper.column_width(sheet, column)
    }

    /// Row height as CSS (`"18px"`), if declared. `row` is 0-based.
    #[wasm_bindgen(js_name = rowHeight)]
    pub fn row_height(&self, sheet: usize, row: usize) -> Option<String> {
        self.mapper.row_height(sheet, row)
    }

    /// The cell at 1-based `row`/`col`, or `null`.
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, sheet: usize, row: u32, col: u32) -> Result<JsValue, JsValue> {
        match self.mapper.get_cell(sheet, row, col) {
            Some(cell) => serde_wasm_bindgen::to_value(cell)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    /// A snapshot of the computed cell at 1-based `row`/`col`, or `null`.
    #[wasm_bindgen(js_name = jitCell)]
    pub fn jit_cell(&mut self, sheet: usize, row: u32, col: u32) -> Result<JsValue, JsValue> {
        match self.mapper.jit_cell(sheet, row, col) {
            Some(cell) => serde_wasm_bindgen::to_value(&*cell)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Add a sheet (JSON text). Appends when `at` is omitted.
    #[wasm_bindgen(js_name = addSpreadsheet)]
    pub fn add_spreadsheet(&mut self, sheet_json: &str, at: Option<usize>) -> Result<(), JsValue> {
        let sheet: Sheet = serde_json::from_str(sheet_json)
            .map_err(|e| JsValue::from_str(&format!("JSON error: {e}")))?;
        self.mapper.add_spreadsheet(sheet, at);
        Ok(())
    }

    /// Set one cell property. Returns `false` for a missing cell or an
    /// unknown property.
    #[wasm_bindgen(js_name = setCellAttribute)]
    pub fn set_cell_attribute(
        &mut self,
        sheet: usize,
        row: u32,
        col: u32,
        attribute: &str,
        value: JsValue,
    ) -> bool {
        let Ok(value) = serde_wasm_bindgen::from_value::<serde_json::Value>(value) else {
            return false;
        };
        let Some(attribute) = CellAttribute::from_json(attribute, &value) else {
            return false;
        };
        self.mapper.set_cell_attribute_at(sheet, row, col, attribute)
    }

    /// Render every sheet as an HTML string.
    #[wasm_bindgen(js_name = toHtml)]
    pub fn to_html(&self) -> String {
        self.mapper.to_html()
    }

    /// Build one detached `<table>` element per sheet.
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen(js_name = toTables)]
    pub fn to_tables(&self) -> Result<js_sys::Array, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let tables = render::dom::build_tables(&document, &self.mapper.to_tables())?;
        Ok(tables.into_iter().collect())
    }

    /// Replace the document with the contents of a live JS grid (see
    /// [`grid::js_host`] for the methods it must expose). Empty trailing rows
    /// and columns are trimmed unless `keepEmptyRows` is set.
    ///
    /// Returns the rebuilt document.
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen(js_name = fromSheet)]
    pub fn from_sheet(
        &mut self,
        grid: JsValue,
        keep_empty_rows: Option<bool>,
    ) -> Result<JsValue, JsValue> {
        let mut host = grid::js_host::JsHostGrid::new(grid);
        let options = ExportOptions::default().keep_empty_rows(keep_empty_rows.unwrap_or(false));
        let document = self.mapper.load_from_grid(&mut host, &options);
        serde_wasm_bindgen::to_value(document)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The document as JSON text.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.mapper
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Render a JSON document straight to HTML tables.
///
/// # Errors
/// Returns an error if the JSON is not a document.
#[wasm_bindgen(js_name = renderTablesHtml)]
pub fn render_tables_html(json: &str) -> Result<String, JsValue> {
    let mapper = DocumentMapper::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(mapper.to_html())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
