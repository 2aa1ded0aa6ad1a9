//! Data types for spreadsheet documents.

mod cell;
mod document;
mod measure;

pub use cell::*;
pub use document::*;
pub use measure::Measure;

pub(crate) use cell::{non_empty, non_zero};
pub(crate) use measure::{de_text, de_truthy};

/// Helper function for serde skip_serializing_if
pub(crate) fn is_false(b: &bool) -> bool {
    !b
}
