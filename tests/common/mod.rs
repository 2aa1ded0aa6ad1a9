//! Common test utilities: in-memory stand-ins for the host grid.
//!
//! `MockGrid` plays the live grid for the export path and `MockEditorHost`
//! plays it for the in-place editor, recording every call it receives.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use sheetmap::editor::{CellLoc, CellRect, EditorHost, KeyPress};
use sheetmap::grid::{GridCell, HostGrid};
use sheetmap::{FrozenAt, GridClasses, SpreadsheetDocument};

// ============================================================================
// Grid for export
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct MockSheet {
    pub title: Option<String>,
    pub frozen_at: FrozenAt,
    /// `rows[0]` is grid row 1
    pub rows: Vec<Vec<GridCell>>,
    /// Inline row heights, parallel to `rows`
    pub row_heights: Vec<Option<String>>,
    /// CSS widths, `col_widths[0]` is grid column 1
    pub col_widths: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MockGrid {
    pub sheets: Vec<MockSheet>,
    pub classes: GridClasses,
    pub committed: Vec<usize>,
}

impl MockGrid {
    pub fn new(sheets: Vec<MockSheet>) -> Self {
        Self {
            sheets,
            classes: GridClasses::default(),
            committed: Vec::new(),
        }
    }

    /// Load a document into live grid state, the way the widget would.
    pub fn from_document(doc: &SpreadsheetDocument) -> Self {
        let sheets = doc
            .sheets
            .iter()
            .map(|sheet| MockSheet {
                title: Some(sheet.title.clone()).filter(|t| !t.is_empty()),
                frozen_at: sheet
                    .metadata
                    .as_ref()
                    .and_then(|m| m.frozen_at)
                    .unwrap_or_default(),
                rows: sheet
                    .rows
                    .iter()
                    .map(|row| {
                        row.cells()
                            .iter()
                            .map(|c| GridCell {
                                formula: c.formula.clone(),
                                value: c.value.clone(),
                                cell_type: c.cell_type.clone(),
                                uneditable: c.uneditable,
                                cache: c.cache.clone(),
                                id: c.id.clone(),
                                class_attr: c.class_name.clone(),
                                style_attr: c.style.clone(),
                                rowspan_attr: c.rowspan.map(|n| n.to_string()),
                                colspan_attr: c.colspan.map(|n| n.to_string()),
                            })
                            .collect()
                    })
                    .collect(),
                row_heights: sheet
                    .rows
                    .iter()
                    .map(|row| row.height.as_ref().map(|h| h.css()))
                    .collect(),
                col_widths: sheet
                    .metadata
                    .as_ref()
                    .and_then(|m| m.widths.as_ref())
                    .map(|w| w.iter().map(|m| m.css()).collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self::new(sheets)
    }

    /// A single untitled sheet of plain values with 18px rows and 64px columns.
    pub fn values(rows: &[&[&str]]) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self::new(vec![MockSheet {
            title: None,
            frozen_at: FrozenAt::default(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| GridCell::with_value(*v)).collect())
                .collect(),
            row_heights: rows.iter().map(|_| Some("18px".to_string())).collect(),
            col_widths: vec!["64px".to_string(); width],
        }])
    }

    fn sheet(&self, sheet: usize) -> Option<&MockSheet> {
        self.sheets.get(sheet)
    }
}

impl HostGrid for MockGrid {
    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn commit_cell_edit(&mut self, sheet: usize) {
        self.committed.push(sheet);
    }

    fn title(&self, sheet: usize) -> Option<String> {
        self.sheet(sheet)?.title.clone()
    }

    fn frozen_at(&self, sheet: usize) -> FrozenAt {
        self.sheet(sheet).map(|s| s.frozen_at).unwrap_or_default()
    }

    fn row_count(&self, sheet: usize) -> u32 {
        self.sheet(sheet).map_or(0, |s| s.rows.len() as u32)
    }

    fn column_count(&self, sheet: usize, row: u32) -> u32 {
        self.sheet(sheet)
            .and_then(|s| s.rows.get(row as usize - 1))
            .map_or(0, |r| r.len() as u32)
    }

    fn cell(&self, sheet: usize, row: u32, col: u32) -> Option<GridCell> {
        self.sheet(sheet)?
            .rows
            .get(row as usize - 1)?
            .get(col as usize - 1)
            .cloned()
    }

    fn row_height(&self, sheet: usize, row: u32) -> Option<String> {
        self.sheet(sheet)?.row_heights.get(row as usize - 1)?.clone()
    }

    fn column_width(&self, sheet: usize, col: u32) -> Option<String> {
        self.sheet(sheet)?.col_widths.get(col as usize - 1).cloned()
    }

    fn class_names(&self) -> &GridClasses {
        &self.classes
    }
}

// ============================================================================
// Host for the in-place editor
// ============================================================================

/// Grid reaction to an active-cell move, run from inside the host call.
pub type MoveHook = Box<dyn FnMut(&mut MockEditorHost)>;

pub struct MockEditorHost {
    pub sheet: usize,
    pub active: Option<CellLoc>,
    pub first: Option<CellLoc>,
    pub highlighted: bool,
    pub rect: Option<CellRect>,
    pub formula: String,
    /// What `cell_set_active_from_key_code` returns
    pub move_result: bool,
    pub on_move: Option<MoveHook>,

    pub edited: Vec<CellLoc>,
    pub triggered: Vec<(String, Vec<serde_json::Value>)>,
    pub moves: Vec<(KeyPress, bool)>,
    pub abandoned: usize,
    pub nav: Vec<bool>,
    pub last_edited: Vec<bool>,
    pub pasted: usize,
}

impl Default for MockEditorHost {
    fn default() -> Self {
        Self {
            sheet: 0,
            active: Some(loc(2, 3)),
            first: Some(loc(1, 1)),
            highlighted: true,
            rect: Some(CellRect {
                left: 121.0,
                top: 41.0,
                width: 64.0,
                height: 18.0,
            }),
            formula: "=A1+1".into(),
            move_result: false,
            on_move: None,
            edited: Vec::new(),
            triggered: Vec::new(),
            moves: Vec::new(),
            abandoned: 0,
            nav: Vec::new(),
            last_edited: Vec::new(),
            pasted: 0,
        }
    }
}

/// A cell on sheet 0.
pub fn loc(row: u32, col: u32) -> CellLoc {
    CellLoc { sheet: 0, row, col }
}

impl EditorHost for MockEditorHost {
    fn current_sheet(&self) -> usize {
        self.sheet
    }

    fn cell_active(&self) -> Option<CellLoc> {
        self.active
    }

    fn first_cell(&self) -> Option<CellLoc> {
        self.first
    }

    fn cell_edit(&mut self, loc: CellLoc) {
        self.edited.push(loc);
    }

    fn is_highlighted(&self, _loc: CellLoc) -> bool {
        self.highlighted
    }

    fn cell_rect(&self, _loc: CellLoc) -> Option<CellRect> {
        self.rect
    }

    fn formula_value(&self) -> String {
        self.formula.clone()
    }

    fn set_formula_value(&mut self, value: &str) {
        self.formula = value.to_string();
    }

    fn trigger(&mut self, event: &str, args: &[serde_json::Value]) {
        self.triggered.push((event.to_string(), args.to_vec()));
    }

    fn cell_set_active_from_key_code(&mut self, key: KeyPress, advance: bool) -> bool {
        self.moves.push((key, advance));
        if let Some(mut hook) = self.on_move.take() {
            hook(self);
            self.on_move = Some(hook);
        }
        self.move_result
    }

    fn cell_edit_abandon(&mut self) {
        self.abandoned += 1;
    }

    fn set_nav(&mut self, enabled: bool) {
        self.nav.push(enabled);
    }

    fn set_last_cell_edited(&mut self, edited: bool) {
        self.last_edited.push(edited);
    }

    fn paste_over_cells(&mut self) {
        self.pasted += 1;
    }
}
