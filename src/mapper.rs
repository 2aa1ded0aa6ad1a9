//! The document mapper: a loaded spreadsheet document plus its computed cells.
//!
//! All lookups degrade to `None`, an empty value or a no-op when any part of
//! the path is missing. Row and column numbers are 1-based when addressing
//! cells and 0-based when indexing `rows` for heights.

use crate::computed::{CellCoord, ComputedCell, ComputedCells};
use crate::config::ExportOptions;
use crate::error::Result;
use crate::export;
use crate::grid::HostGrid;
use crate::render::{self, TableNode};
use crate::types::{non_empty, non_zero, Cell, CellAttribute, Sheet, SpreadsheetDocument};

/// Row and column count of a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SheetSize {
    pub rows: usize,
    pub cols: usize,
}

/// Something a pixel width or height can be applied to (a `<col>`, a row bar `<td>`).
pub trait SizeTarget {
    fn set_width(&mut self, css: &str);
    fn set_height(&mut self, css: &str);
}

/// What a host needs to materialize one live cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSetup {
    /// The cell's evaluation record, handed over to the host
    pub record: ComputedCell,
    /// `data-formula` (without `=`)
    pub formula: Option<String>,
    /// Inner markup
    pub html: Option<String>,
    pub class: String,
    pub style: String,
    pub rowspan: Option<u32>,
    pub colspan: Option<u32>,
    pub uneditable: bool,
    pub id: Option<String>,
}

/// Owns one document and the computed cells derived from it.
#[derive(Debug, Default)]
pub struct DocumentMapper {
    document: SpreadsheetDocument,
    computed: ComputedCells,
}

impl DocumentMapper {
    #[must_use]
    pub fn new(document: SpreadsheetDocument) -> Self {
        Self {
            document,
            computed: ComputedCells::new(),
        }
    }

    /// Load a document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    #[must_use]
    pub fn document(&self) -> &SpreadsheetDocument {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> SpreadsheetDocument {
        self.document
    }

    /// Number of sheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.document.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    fn sheet(&self, sheet: usize) -> Option<&Sheet> {
        self.document.sheets.get(sheet)
    }

    /// Row count, and the column count of the first row.
    ///
    /// A first row without a `columns` key makes the whole sheet `{0, 0}`;
    /// an explicit empty `columns` gives `{rows, 0}`.
    #[must_use]
    pub fn size(&self, sheet: usize) -> SheetSize {
        let Some(sheet) = self.sheet(sheet) else {
            return SheetSize::default();
        };
        let Some(columns) = sheet.rows.first().and_then(|r| r.columns.as_ref()) else {
            return SheetSize::default();
        };
        SheetSize {
            rows: sheet.rows.len(),
            cols: columns.len(),
        }
    }

    /// The declared width of a column as CSS (`"120px"`).
    #[must_use]
    pub fn column_width(&self, sheet: usize, column: usize) -> Option<String> {
        self.sheet(sheet)?.widths()?.get(column).map(|w| w.css())
    }

    /// Apply a column's declared width to `target`. No-op without one.
    pub fn set_width(&self, sheet: usize, column: usize, target: &mut impl SizeTarget) {
        if let Some(css) = self.column_width(sheet, column) {
            target.set_width(&css);
        }
    }

    /// The declared height of a 0-based row as CSS (`"18px"`).
    #[must_use]
    pub fn row_height(&self, sheet: usize, row: usize) -> Option<String> {
        self.sheet(sheet)?
            .rows
            .get(row)?
            .height
            .as_ref()
            .map(|h| h.css())
    }

    /// Apply a row's declared height to `target`. No-op without one.
    pub fn set_row_height(&self, sheet: usize, row: usize, target: &mut impl SizeTarget) {
        if let Some(css) = self.row_height(sheet, row) {
            target.set_height(&css);
        }
    }

    /// The cell at 1-based `row`/`col`. Index 0 never matches.
    #[must_use]
    pub fn get_cell(&self, sheet: usize, row: u32, col: u32) -> Option<&Cell> {
        let row_idx = usize::try_from(row.checked_sub(1)?).ok()?;
        let col_idx = usize::try_from(col.checked_sub(1)?).ok()?;
        self.sheet(sheet)?.rows.get(row_idx)?.cells().get(col_idx)
    }

    fn get_cell_mut(&mut self, sheet: usize, row: u32, col: u32) -> Option<&mut Cell> {
        let row_idx = usize::try_from(row.checked_sub(1)?).ok()?;
        let col_idx = usize::try_from(col.checked_sub(1)?).ok()?;
        self.document
            .sheets
            .get_mut(sheet)?
            .rows
            .get_mut(row_idx)?
            .cells_mut()
            .get_mut(col_idx)
    }

    /// The computed cell for a document cell, built on first request.
    ///
    /// Repeated calls with the same coordinates return the same record until
    /// it is taken with [`take_computed`](Self::take_computed) or the
    /// document is replaced.
    pub fn jit_cell(&mut self, sheet: usize, row: u32, col: u32) -> Option<&mut ComputedCell> {
        let coord = CellCoord::new(sheet, row, col);
        let Self { document, computed } = self;
        let sheet_ref = document.sheets.get(sheet)?;
        let row_idx = usize::try_from(row.checked_sub(1)?).ok()?;
        let col_idx = usize::try_from(col.checked_sub(1)?).ok()?;
        let cell = sheet_ref.rows.get(row_idx)?.cells().get(col_idx)?;
        Some(computed.get_or_insert_with(coord, || ComputedCell::seed(coord, cell)))
    }

    /// An already built computed cell, without building one.
    #[must_use]
    pub fn computed_cell(&self, sheet: usize, row: u32, col: u32) -> Option<&ComputedCell> {
        self.computed.get(&CellCoord::new(sheet, row, col))
    }

    /// Remove and return a computed cell.
    pub fn take_computed(&mut self, sheet: usize, row: u32, col: u32) -> Option<ComputedCell> {
        self.computed.remove(&CellCoord::new(sheet, row, col))
    }

    /// Sheet title, or `""`.
    #[must_use]
    pub fn title(&self, sheet: usize) -> &str {
        self.sheet(sheet).map_or("", |s| s.title.as_str())
    }

    /// Index of the first sheet titled exactly `title`.
    #[must_use]
    pub fn sheet_index_by_title(&self, title: &str) -> Option<usize> {
        self.document.sheets.iter().position(|s| s.title == title)
    }

    /// Append `sheet`, or insert it at `at` and shift later sheets right.
    ///
    /// An index past the end appends.
    pub fn add_spreadsheet(&mut self, sheet: Sheet, at: Option<usize>) {
        match at {
            Some(index) if index < self.document.sheets.len() => {
                self.document.sheets.insert(index, sheet);
                self.computed.shift_sheets_from(index);
            }
            _ => self.document.sheets.push(sheet),
        }
        log::debug!("sheet added, document has {} sheets", self.len());
    }

    /// Set one property of `cell`.
    pub fn set_cell_attribute(cell: &mut Cell, attribute: CellAttribute) {
        cell.set_attribute(attribute);
    }

    /// Set one property of the cell at 1-based `row`/`col`.
    ///
    /// Returns `false` when there is no such cell.
    pub fn set_cell_attribute_at(
        &mut self,
        sheet: usize,
        row: u32,
        col: u32,
        attribute: CellAttribute,
    ) -> bool {
        match self.get_cell_mut(sheet, row, col) {
            Some(cell) => {
                Self::set_cell_attribute(cell, attribute);
                true
            }
            None => false,
        }
    }

    /// Attributes, text and evaluation record for a host cell.
    ///
    /// A computed cell built earlier is consumed and takes precedence over
    /// the document cell for formula and text.
    pub fn setup_cell(&mut self, sheet: usize, row: u32, col: u32) -> CellSetup {
        let coord = CellCoord::new(sheet, row, col);
        let taken = self.computed.remove(&coord);
        let Some(cell) = self.get_cell(sheet, row, col) else {
            return CellSetup {
                record: taken.unwrap_or_else(|| ComputedCell::seed(coord, &Cell::default())),
                formula: None,
                html: None,
                class: String::new(),
                style: String::new(),
                rowspan: None,
                colspan: None,
                uneditable: false,
                id: None,
            };
        };

        let (record, formula, html) = match taken {
            Some(record) => {
                let formula = non_empty(Some(record.formula.as_str())).map(str::to_string);
                let html = if formula.is_some() {
                    record.result.clone()
                } else {
                    Some(record.value.clone())
                };
                (record, formula, html)
            }
            None => {
                let record = ComputedCell::seed(coord, cell);
                let formula = cell.formula_text().map(str::to_string);
                let html = if formula.is_some() {
                    None
                } else {
                    cell.value.clone()
                };
                (record, formula, html)
            }
        };

        CellSetup {
            record,
            formula,
            html,
            class: cell.class_name.clone().unwrap_or_default(),
            style: cell.style.clone().unwrap_or_default(),
            rowspan: non_zero(cell.rowspan),
            colspan: non_zero(cell.colspan),
            uneditable: cell.uneditable,
            id: non_empty(cell.id.as_deref()).map(str::to_string),
        }
    }

    /// Render every sheet as a table tree.
    #[must_use]
    pub fn to_tables(&self) -> Vec<TableNode> {
        render::to_tables(&self.document)
    }

    /// Render every sheet as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        render::write_html(&self.to_tables())
    }

    /// Rebuild the document from a live grid and keep it.
    ///
    /// Computed cells of the old document are dropped.
    pub fn load_from_grid<H: HostGrid + ?Sized>(
        &mut self,
        host: &mut H,
        options: &ExportOptions,
    ) -> &SpreadsheetDocument {
        self.document = export::from_grid(host, options);
        self.computed.clear();
        log::debug!("document rebuilt from grid: {} sheets", self.len());
        &self.document
    }
}

impl From<SpreadsheetDocument> for DocumentMapper {
    fn from(document: SpreadsheetDocument) -> Self {
        Self::new(document)
    }
}
