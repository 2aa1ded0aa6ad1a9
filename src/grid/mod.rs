//! The host grid widget as seen by the export path.
//!
//! The grid owns the live table DOM and one record per cell. Rows and
//! columns are 1-based; index 0 is the header bar (row numbers and column
//! letters) and is never exported.

#[cfg(target_arch = "wasm32")]
pub mod js_host;

use serde::Deserialize;

use crate::config::GridClasses;
use crate::types::{de_text, de_truthy, FrozenAt};

/// Snapshot of one live cell: the cell record plus the attributes of its `td`.
///
/// Loads from `{formula, value, cellType, uneditable, cache, id, class,
/// style, rowspan, colspan}`, every key optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridCell {
    #[serde(deserialize_with = "de_text")]
    pub formula: Option<String>,
    #[serde(deserialize_with = "de_text")]
    pub value: Option<String>,
    #[serde(deserialize_with = "de_text")]
    pub cell_type: Option<String>,
    #[serde(deserialize_with = "de_truthy")]
    pub uneditable: bool,
    #[serde(deserialize_with = "de_text")]
    pub cache: Option<String>,
    #[serde(deserialize_with = "de_text")]
    pub id: Option<String>,
    /// Raw `class` attribute, transient classes included
    #[serde(rename = "class", deserialize_with = "de_text")]
    pub class_attr: Option<String>,
    /// Raw `style` attribute
    #[serde(rename = "style", deserialize_with = "de_text")]
    pub style_attr: Option<String>,
    #[serde(rename = "rowspan", deserialize_with = "de_text")]
    pub rowspan_attr: Option<String>,
    #[serde(rename = "colspan", deserialize_with = "de_text")]
    pub colspan_attr: Option<String>,
}

impl GridCell {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        GridCell {
            value: Some(value.into()),
            ..GridCell::default()
        }
    }
}

/// Operations the export path needs from the host grid.
pub trait HostGrid {
    fn sheet_count(&self) -> usize;

    /// Commit any in-progress cell edit on `sheet` before it is read.
    fn commit_cell_edit(&mut self, sheet: usize);

    /// The `title` attribute of the sheet's table.
    fn title(&self, sheet: usize) -> Option<String>;

    /// Frozen pane position of the sheet's pane.
    fn frozen_at(&self, sheet: usize) -> FrozenAt;

    /// Highest 1-based row index.
    fn row_count(&self, sheet: usize) -> u32;

    /// Highest 1-based column index in `row`.
    fn column_count(&self, sheet: usize, row: u32) -> u32;

    fn cell(&self, sheet: usize, row: u32, col: u32) -> Option<GridCell>;

    /// Inline CSS height of the row element (e.g. `"18px"`).
    fn row_height(&self, sheet: usize, row: u32) -> Option<String>;

    /// Computed CSS width of a column (e.g. `"120px"`).
    fn column_width(&self, sheet: usize, col: u32) -> Option<String>;

    /// Transient classes to strip from exported `class` values.
    fn class_names(&self) -> &GridClasses;
}
