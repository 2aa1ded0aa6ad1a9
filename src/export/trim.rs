//! Row trimming for export.
//!
//! A row is exported up to its rightmost content-bearing column. Everything
//! to the left of that column is kept even when empty, so column positions
//! survive the trip. Rows with no such column are dropped.

use crate::grid::GridCell;
use crate::types::non_empty;

/// Whether a live cell carries content worth exporting on its own.
pub(crate) fn has_content(cell: &GridCell) -> bool {
    non_empty(cell.class_attr.as_deref()).is_some()
        || non_empty(cell.formula.as_deref()).is_some()
        || non_empty(cell.value.as_deref()).is_some()
        || non_empty(cell.style_attr.as_deref()).is_some()
}

/// The last 1-based column to export for a row of `column_count` columns,
/// or `None` when the whole row is trimmed.
///
/// `cell_at` returns the live cell for a 1-based column.
pub(crate) fn row_cutoff<F>(column_count: u32, keep_empty: bool, cell_at: F) -> Option<u32>
where
    F: Fn(u32) -> Option<GridCell>,
{
    if column_count == 0 {
        return None;
    }
    if keep_empty {
        return Some(column_count);
    }
    (1..=column_count)
        .rev()
        .find(|&col| cell_at(col).is_some_and(|c| has_content(&c)))
}
