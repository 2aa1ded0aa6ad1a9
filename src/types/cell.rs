use serde::{Deserialize, Serialize};

use super::measure::{de_span, de_text, de_truthy, js_text, js_truthy};

/// A single cell of a sheet row.
///
/// Every field is optional on the wire; absent and empty mean the same thing
/// to the mapper. Text fields also load from numbers and booleans, and
/// `uneditable` from any value by truthiness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Formula text without the leading `=`
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<String>,
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "de_truthy", skip_serializing_if = "super::is_false")]
    pub uneditable: bool,
    /// Last rendered text
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Inline CSS
    #[serde(default, deserialize_with = "de_text", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// CSS classes
    #[serde(
        rename = "class",
        default,
        deserialize_with = "de_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub rowspan: Option<u32>,
    #[serde(
        default,
        deserialize_with = "de_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub colspan: Option<u32>,
}

/// One settable cell property together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAttribute {
    Formula(String),
    CellType(String),
    Value(String),
    Uneditable(bool),
    Cache(String),
    Id(String),
    Style(String),
    Class(String),
    Rowspan(u32),
    Colspan(u32),
}

impl CellAttribute {
    /// Build an attribute from its wire name (`"value"`, `"cellType"`, `"class"`, ...).
    ///
    /// Strings and numbers are accepted for text properties, numbers and
    /// numeric strings for spans, and any JSON value for `uneditable` (by
    /// truthiness). Unknown names give `None`.
    #[must_use]
    pub fn from_json(name: &str, value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        let text = || js_text(value);
        let span = || match value {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };

        Some(match name {
            "formula" => CellAttribute::Formula(text()?),
            "cellType" => CellAttribute::CellType(text()?),
            "value" => CellAttribute::Value(text()?),
            "uneditable" => CellAttribute::Uneditable(js_truthy(value)),
            "cache" => CellAttribute::Cache(text()?),
            "id" => CellAttribute::Id(text()?),
            "style" => CellAttribute::Style(text()?),
            "class" => CellAttribute::Class(text()?),
            "rowspan" => CellAttribute::Rowspan(span()?),
            "colspan" => CellAttribute::Colspan(span()?),
            _ => return None,
        })
    }
}

impl Cell {
    /// Create a cell holding only a value.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Cell {
            value: Some(value.into()),
            ..Cell::default()
        }
    }

    /// Set one property. No validation is done.
    pub fn set_attribute(&mut self, attribute: CellAttribute) {
        match attribute {
            CellAttribute::Formula(v) => self.formula = Some(v),
            CellAttribute::CellType(v) => self.cell_type = Some(v),
            CellAttribute::Value(v) => self.value = Some(v),
            CellAttribute::Uneditable(v) => self.uneditable = v,
            CellAttribute::Cache(v) => self.cache = Some(v),
            CellAttribute::Id(v) => self.id = Some(v),
            CellAttribute::Style(v) => self.style = Some(v),
            CellAttribute::Class(v) => self.class_name = Some(v),
            CellAttribute::Rowspan(v) => self.rowspan = Some(v),
            CellAttribute::Colspan(v) => self.colspan = Some(v),
        }
    }

    pub(crate) fn formula_text(&self) -> Option<&str> {
        non_empty(self.formula.as_deref())
    }

    pub(crate) fn value_text(&self) -> Option<&str> {
        non_empty(self.value.as_deref())
    }
}

/// `Some` only for a present, non-empty string.
pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// `Some` only for a present, non-zero span.
pub(crate) fn non_zero(n: Option<u32>) -> Option<u32> {
    n.filter(|n| *n != 0)
}
