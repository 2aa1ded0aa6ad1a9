//! Option structs shared by the export path and the in-place editor.

use serde::{Deserialize, Serialize};

/// Options for rebuilding a document from a live grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Keep every row and column, even ones with no content.
    pub keep_empty_rows: bool,
    /// Height written for rows without an inline height (the grid's `colMargin`).
    pub default_row_height: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            keep_empty_rows: false,
            default_row_height: 18,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn keep_empty_rows(mut self, keep: bool) -> Self {
        self.keep_empty_rows = keep;
        self
    }
}

/// Transient CSS classes the grid puts on cells.
///
/// They are stripped from exported `class` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridClasses {
    pub cell_active: String,
    pub cell_highlighted: String,
}

impl Default for GridClasses {
    fn default() -> Self {
        Self {
            cell_active: "jSCellActive".into(),
            cell_highlighted: "jSCellHighlighted".into(),
        }
    }
}

impl GridClasses {
    /// Remove the first occurrence of each transient class, then trim.
    #[must_use]
    pub fn strip(&self, class: &str) -> String {
        let mut out = class.to_string();
        for transient in [&self.cell_active, &self.cell_highlighted] {
            if !transient.is_empty() {
                out = out.replacen(transient.as_str(), "", 1);
            }
        }
        out.trim().to_string()
    }
}

/// Class names applied to the in-place edit overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorClasses {
    pub in_place_edit: String,
    /// Theme class appended after `in_place_edit`.
    pub theme: String,
}

impl Default for EditorClasses {
    fn default() -> Self {
        Self {
            in_place_edit: "jSInPlaceEdit".into(),
            theme: String::new(),
        }
    }
}

impl EditorClasses {
    /// The full `class` attribute value.
    #[must_use]
    pub fn class_attr(&self) -> String {
        format!("{} {}", self.in_place_edit, self.theme)
    }
}
