use serde::{Deserialize, Serialize};

use super::measure::de_text_or_empty;
use super::{Cell, Measure};

/// A spreadsheet collection: the top-level JSON array of sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpreadsheetDocument {
    pub sheets: Vec<Sheet>,
}

/// One page of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default, deserialize_with = "de_text_or_empty")]
    pub title: String,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SheetMetadata>,
}

/// Column widths and frozen pane position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMetadata {
    /// One width per column. `Some(vec![])` still renders an empty column group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<Measure>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<FrozenAt>,
}

/// Row/column beyond which the view does not scroll. Zero means not frozen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrozenAt {
    pub row: u32,
    pub col: u32,
}

/// A sheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// `None` when the row has no `columns` key, which is not the same as `[]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Measure>,
}

impl SpreadsheetDocument {
    #[must_use]
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Sheet {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Sheet {
            title: title.into(),
            ..Sheet::default()
        }
    }

    pub(crate) fn widths(&self) -> Option<&[Measure]> {
        self.metadata.as_ref()?.widths.as_deref()
    }

    pub(crate) fn frozen_at(&self) -> Option<FrozenAt> {
        self.metadata.as_ref()?.frozen_at
    }
}

impl Row {
    #[must_use]
    pub fn new(columns: Vec<Cell>) -> Self {
        Row {
            columns: Some(columns),
            height: None,
        }
    }

    /// The row's cells; empty when `columns` is absent.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.columns.as_deref().unwrap_or_default()
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        self.columns.as_deref_mut().unwrap_or_default()
    }

    #[must_use]
    pub fn with_height(mut self, height: impl Into<Measure>) -> Self {
        self.height = Some(height.into());
        self
    }
}
