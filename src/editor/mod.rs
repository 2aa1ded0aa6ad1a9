//! In-place cell editing.
//!
//! [`InPlaceEditor`] floats a text box over the selected cell:
//! - The box opens on the active cell, loaded with the formula bar's text
//! - Enter and Tab move the active cell; Shift keeps the default behavior
//! - Escape abandons the edit
//! - Every keystroke is copied back into the formula bar
//!
//! The grid itself is reached through [`EditorHost`]. On wasm32 the box is a
//! `<textarea>` ([`TextareaOverlay`](input::TextareaOverlay)) and the host is
//! a JavaScript grid object ([`InPlaceEdit`](js_host::InPlaceEdit)), which
//! drives a [`SharedEditor`] from its event handlers.

#[cfg(target_arch = "wasm32")]
pub(crate) mod input;
#[cfg(target_arch = "wasm32")]
pub mod js_host;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::EditorClasses;

/// Event triggered on the grid for every key pressed in the editor.
pub const FORMULA_KEYDOWN_EVENT: &str = "sheetFormulaKeydown";

/// A cell of the live grid: 0-based sheet, 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellLoc {
    pub sheet: usize,
    pub row: u32,
    pub col: u32,
}

/// Position of a cell relative to its pane, plus its client size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the edit box goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Hidden,
    Over(CellRect),
}

impl Placement {
    /// Cells at the very left edge (or without a position) hide the box.
    #[must_use]
    pub fn for_rect(rect: Option<CellRect>) -> Self {
        match rect {
            Some(r) if r.left != 0.0 && !r.left.is_nan() => Placement::Over(r),
            _ => Placement::Hidden,
        }
    }

    /// Inline style for the box, or `None` when hidden.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        let Placement::Over(r) = self else {
            return None;
        };
        Some(format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;min-width:{}px;min-height:{}px;",
            r.left - 1.0,
            r.top - 1.0,
            r.width,
            r.height,
            r.width,
            r.height
        ))
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Tab,
    Escape,
    Other(u32),
}

impl Key {
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            13 => Key::Enter,
            9 => Key::Tab,
            27 => Key::Escape,
            other => Key::Other(other),
        }
    }

    #[must_use]
    pub fn key_code(self) -> u32 {
        match self {
            Key::Enter => 13,
            Key::Tab => 9,
            Key::Escape => 27,
            Key::Other(code) => code,
        }
    }
}

/// A key press with the modifier the editor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPress {
    pub key_code: u32,
    pub shift_key: bool,
}

impl KeyPress {
    #[must_use]
    pub fn new(key: Key, shift: bool) -> Self {
        Self {
            key_code: key.key_code(),
            shift_key: shift,
        }
    }

    #[must_use]
    pub fn key(&self) -> Key {
        Key::from_key_code(self.key_code)
    }
}

/// Whether the browser's default action for a key should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Default,
    Prevent,
}

impl From<bool> for KeyOutcome {
    fn from(allow_default: bool) -> Self {
        if allow_default {
            KeyOutcome::Default
        } else {
            KeyOutcome::Prevent
        }
    }
}

/// Grid operations the editor needs.
pub trait EditorHost {
    /// Index of the sheet being edited.
    fn current_sheet(&self) -> usize;

    fn cell_active(&self) -> Option<CellLoc>;

    /// First cell of row 1, used when nothing is active.
    fn first_cell(&self) -> Option<CellLoc>;

    /// Make `loc` the cell being edited.
    fn cell_edit(&mut self, loc: CellLoc);

    /// Cells that are not highlighted (merged-away duds) get no editor.
    fn is_highlighted(&self, loc: CellLoc) -> bool;

    fn cell_rect(&self, loc: CellLoc) -> Option<CellRect>;

    fn formula_value(&self) -> String;

    fn set_formula_value(&mut self, value: &str);

    fn trigger(&mut self, event: &str, args: &[serde_json::Value]);

    /// Move the active cell for a navigation key. Returns whether the
    /// key's default action should still run.
    fn cell_set_active_from_key_code(&mut self, key: KeyPress, advance: bool) -> bool;

    fn cell_edit_abandon(&mut self);

    /// Enable or disable grid keyboard navigation.
    fn set_nav(&mut self, enabled: bool);

    /// Record whether the last edited cell actually changed.
    fn set_last_cell_edited(&mut self, edited: bool);

    fn paste_over_cells(&mut self) {}
}

/// An open edit box.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub sheet: usize,
    pub target: CellLoc,
    /// Formula bar text when the box opened
    pub original: String,
    /// Current box text
    pub text: String,
    pub placement: Placement,
    /// Select all text on open
    pub selected: bool,
}

impl EditSession {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.text != self.original
    }
}

/// The in-place editor state machine. At most one box is open at a time.
#[derive(Debug, Default)]
pub struct InPlaceEditor {
    classes: EditorClasses,
    session: Option<EditSession>,
}

impl InPlaceEditor {
    #[must_use]
    pub fn new(classes: EditorClasses) -> Self {
        Self {
            classes,
            session: None,
        }
    }

    #[must_use]
    pub fn classes(&self) -> &EditorClasses {
        &self.classes
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a box is open on `sheet`.
    #[must_use]
    pub fn is_open_on(&self, sheet: usize) -> bool {
        self.session.as_ref().is_some_and(|s| s.sheet == sheet)
    }

    /// Open a box over `target`, or over the active cell.
    ///
    /// With no active cell the first cell of row 1 is made the edited cell.
    /// Any open box is destroyed first. Returns `None` when there is nothing
    /// to edit or the target is not highlighted.
    pub fn open<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: Option<CellLoc>,
        selected: bool,
    ) -> Option<&EditSession> {
        let target = Self::resolve_target(host, target)?;
        self.destroy(host);
        self.session = Self::begin(host, target, selected);
        self.session.as_ref()
    }

    /// Handle a key press in the box.
    pub fn key_down<H: EditorHost + ?Sized>(&mut self, host: &mut H, key: KeyPress) -> KeyOutcome {
        Self::handle_key(host, key)
    }

    /// The box text changed; mirror it to the formula bar.
    pub fn input<H: EditorHost + ?Sized>(&mut self, host: &mut H, text: &str) {
        self.sync_text(text);
        host.set_formula_value(text);
    }

    /// Record the box text without touching the grid.
    pub fn sync_text(&mut self, text: &str) {
        if let Some(session) = self.session.as_mut() {
            session.text = text.to_string();
        }
    }

    pub fn focus<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        host.set_nav(false);
    }

    pub fn blur<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        host.set_nav(true);
    }

    pub fn paste<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        host.paste_over_cells();
    }

    /// Close the box. Returns whether its text differed from the text it
    /// opened with, or `None` when no box was open.
    pub fn destroy<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Option<bool> {
        let session = self.session.take()?;
        Some(Self::finish(host, &session))
    }

    fn resolve_target<H: EditorHost + ?Sized>(
        host: &mut H,
        target: Option<CellLoc>,
    ) -> Option<CellLoc> {
        match target.or_else(|| host.cell_active()) {
            Some(loc) => Some(loc),
            None => {
                let first = host.first_cell()?;
                host.cell_edit(first);
                Some(first)
            }
        }
    }

    fn begin<H: EditorHost + ?Sized>(
        host: &mut H,
        target: CellLoc,
        selected: bool,
    ) -> Option<EditSession> {
        let original = host.formula_value();
        if !host.is_highlighted(target) {
            return None;
        }

        let placement = Placement::for_rect(host.cell_rect(target));
        host.set_nav(false);

        log::debug!(
            "in-place edit opened at sheet {} R{}C{}",
            target.sheet,
            target.row,
            target.col
        );

        Some(EditSession {
            sheet: host.current_sheet(),
            target,
            text: original.clone(),
            original,
            placement,
            selected,
        })
    }

    fn handle_key<H: EditorHost + ?Sized>(host: &mut H, key: KeyPress) -> KeyOutcome {
        host.trigger(FORMULA_KEYDOWN_EVENT, &[serde_json::Value::Bool(true)]);

        match key.key() {
            Key::Enter | Key::Tab => {
                if key.shift_key {
                    KeyOutcome::Default
                } else {
                    host.cell_set_active_from_key_code(key, true).into()
                }
            }
            Key::Escape => {
                host.cell_edit_abandon();
                KeyOutcome::Prevent
            }
            Key::Other(_) => KeyOutcome::Default,
        }
    }

    fn finish<H: EditorHost + ?Sized>(host: &mut H, session: &EditSession) -> bool {
        let changed = session.is_changed();
        host.set_last_cell_edited(changed);
        changed
    }
}

/// An [`InPlaceEditor`] shared between event handlers.
///
/// The grid may call back into the editor while one of its own methods is
/// running (Enter moves the active cell, and moving the active cell destroys
/// the editor). The state is only borrowed between host calls, never across
/// one, so every such re-entry sees a consistent editor.
#[derive(Debug, Clone, Default)]
pub struct SharedEditor(Rc<RefCell<InPlaceEditor>>);

impl SharedEditor {
    #[must_use]
    pub fn new(classes: EditorClasses) -> Self {
        Self(Rc::new(RefCell::new(InPlaceEditor::new(classes))))
    }

    #[must_use]
    pub fn classes(&self) -> EditorClasses {
        self.0.borrow().classes.clone()
    }

    #[must_use]
    pub fn session(&self) -> Option<EditSession> {
        self.0.borrow().session.clone()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.0.borrow().is_open()
    }

    /// See [`InPlaceEditor::open`].
    pub fn open<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
        target: Option<CellLoc>,
        selected: bool,
    ) -> Option<EditSession> {
        let target = InPlaceEditor::resolve_target(host, target)?;
        self.destroy(host);
        let session = InPlaceEditor::begin(host, target, selected)?;
        self.0.borrow_mut().session = Some(session.clone());
        Some(session)
    }

    pub fn key_down<H: EditorHost + ?Sized>(&self, host: &mut H, key: KeyPress) -> KeyOutcome {
        InPlaceEditor::handle_key(host, key)
    }

    pub fn input<H: EditorHost + ?Sized>(&self, host: &mut H, text: &str) {
        self.sync_text(text);
        host.set_formula_value(text);
    }

    pub fn sync_text(&self, text: &str) {
        self.0.borrow_mut().sync_text(text);
    }

    pub fn focus<H: EditorHost + ?Sized>(&self, host: &mut H) {
        host.set_nav(false);
    }

    pub fn blur<H: EditorHost + ?Sized>(&self, host: &mut H) {
        host.set_nav(true);
    }

    pub fn paste<H: EditorHost + ?Sized>(&self, host: &mut H) {
        host.paste_over_cells();
    }

    /// See [`InPlaceEditor::destroy`].
    pub fn destroy<H: EditorHost + ?Sized>(&self, host: &mut H) -> Option<bool> {
        let session = self.0.borrow_mut().session.take()?;
        Some(InPlaceEditor::finish(host, &session))
    }
}
