//! Lazily built per-cell evaluation records ("jit cells").
//!
//! A [`ComputedCell`] is created the first time something asks for a cell's
//! computed state and is reused afterwards. Records live in a side table
//! keyed by coordinates rather than on the [`Cell`] itself, so the document
//! stays plain serde data.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::Cell;

/// A cell address: 0-based sheet, 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellCoord {
    pub sheet: usize,
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    #[must_use]
    pub fn new(sheet: usize, row: u32, col: u32) -> Self {
        Self { sheet, row, col }
    }
}

/// Evaluation bookkeeping for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedCell {
    pub coord: CellCoord,
    pub cell_type: String,
    pub formula: String,
    pub value: String,
    pub uneditable: bool,
    pub calc_count: u32,
    pub calc_last: i64,
    pub calc_dependencies_last: i64,
    pub dependencies: BTreeSet<CellCoord>,
    /// Rendered markup stack
    pub html: Vec<String>,
    pub state: Vec<String>,
    /// Last evaluation result
    pub result: Option<String>,
    pub id: Option<String>,
}

impl ComputedCell {
    /// Seed a record from the document cell at `coord`.
    #[must_use]
    pub fn seed(coord: CellCoord, cell: &Cell) -> Self {
        ComputedCell {
            coord,
            cell_type: cell.cell_type.clone().unwrap_or_default(),
            formula: cell.formula.clone().unwrap_or_default(),
            value: cell.value.clone().unwrap_or_default(),
            uneditable: cell.uneditable,
            calc_count: 0,
            calc_last: -1,
            calc_dependencies_last: -1,
            dependencies: BTreeSet::new(),
            html: Vec::new(),
            state: Vec::new(),
            result: None,
            id: None,
        }
    }
}

/// Side table of computed cells.
#[derive(Debug, Default)]
pub struct ComputedCells {
    cells: HashMap<CellCoord, ComputedCell>,
}

impl ComputedCells {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: &CellCoord) -> Option<&ComputedCell> {
        self.cells.get(coord)
    }

    pub fn get_mut(&mut self, coord: &CellCoord) -> Option<&mut ComputedCell> {
        self.cells.get_mut(coord)
    }

    /// Return the record at `coord`, building it with `seed` only if absent.
    pub fn get_or_insert_with<F>(&mut self, coord: CellCoord, seed: F) -> &mut ComputedCell
    where
        F: FnOnce() -> ComputedCell,
    {
        self.cells.entry(coord).or_insert_with(|| {
            log::trace!(
                "computed cell created at sheet {} R{}C{}",
                coord.sheet,
                coord.row,
                coord.col
            );
            seed()
        })
    }

    pub fn remove(&mut self, coord: &CellCoord) -> Option<ComputedCell> {
        self.cells.remove(coord)
    }

    /// Renumber records after a sheet was inserted at `index`.
    pub fn shift_sheets_from(&mut self, index: usize) {
        if !self.cells.keys().any(|c| c.sheet >= index) {
            return;
        }
        self.cells = self
            .cells
            .drain()
            .map(|(mut coord, mut cell)| {
                if coord.sheet >= index {
                    coord.sheet += 1;
                    cell.coord = coord;
                }
                (coord, cell)
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
