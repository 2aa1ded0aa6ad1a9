//! JavaScript grid host and the wasm-exported in-place editor.
//!
//! The grid is any JS object exposing these methods:
//!
//! | method | returns |
//! |---|---|
//! | `currentSheet()` | sheet index |
//! | `cellActive()` / `firstCell()` | `{sheet, row, col}` or `null` |
//! | `cellEdit(loc)` | - |
//! | `isHighlighted(loc)` | boolean |
//! | `cellRect(loc)` | `{left, top, width, height}` or `null` |
//! | `formulaValue()` / `setFormulaValue(text)` | string / - |
//! | `trigger(event, args)` | - |
//! | `cellSetActiveFromKeyCode({keyCode, shiftKey}, advance)` | boolean |
//! | `cellEditAbandon()`, `setNav(bool)`, `setLastCellEdited(bool)`, `pasteOverCells()` | - |
//! | `pane()` | the pane element the textarea is appended to |
//!
//! Any of these may call back into the editor, `destroy()` included.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

use super::input::TextareaOverlay;
use super::{CellLoc, CellRect, EditorHost, KeyOutcome, KeyPress, SharedEditor};
use crate::config::EditorClasses;
use crate::js::{call, call_as, is_absent, to_js};

/// [`EditorHost`] backed by a JS grid object.
#[derive(Clone)]
pub struct JsGridHost {
    grid: JsValue,
}

impl JsGridHost {
    #[must_use]
    pub fn new(grid: JsValue) -> Self {
        Self { grid }
    }

    fn call(&self, method: &str, args: &[JsValue]) -> JsValue {
        call(&self.grid, method, args)
    }

    fn pane(&self) -> Option<HtmlElement> {
        self.call("pane", &[]).dyn_into::<HtmlElement>().ok()
    }
}

impl EditorHost for JsGridHost {
    fn current_sheet(&self) -> usize {
        call_as(&self.grid, "currentSheet", &[]).unwrap_or(0)
    }

    fn cell_active(&self) -> Option<CellLoc> {
        call_as(&self.grid, "cellActive", &[])
    }

    fn first_cell(&self) -> Option<CellLoc> {
        call_as(&self.grid, "firstCell", &[])
    }

    fn cell_edit(&mut self, loc: CellLoc) {
        self.call("cellEdit", &[to_js(&loc)]);
    }

    fn is_highlighted(&self, loc: CellLoc) -> bool {
        self.call("isHighlighted", &[to_js(&loc)]).is_truthy()
    }

    fn cell_rect(&self, loc: CellLoc) -> Option<CellRect> {
        call_as(&self.grid, "cellRect", &[to_js(&loc)])
    }

    fn formula_value(&self) -> String {
        self.call("formulaValue", &[]).as_string().unwrap_or_default()
    }

    fn set_formula_value(&mut self, value: &str) {
        self.call("setFormulaValue", &[JsValue::from_str(value)]);
    }

    fn trigger(&mut self, event: &str, args: &[serde_json::Value]) {
        self.call("trigger", &[JsValue::from_str(event), to_js(&args)]);
    }

    fn cell_set_active_from_key_code(&mut self, key: KeyPress, advance: bool) -> bool {
        self.call(
            "cellSetActiveFromKeyCode",
            &[to_js(&key), JsValue::from_bool(advance)],
        )
        .is_truthy()
    }

    fn cell_edit_abandon(&mut self) {
        self.call("cellEditAbandon", &[]);
    }

    fn set_nav(&mut self, enabled: bool) {
        self.call("setNav", &[JsValue::from_bool(enabled)]);
    }

    fn set_last_cell_edited(&mut self, edited: bool) {
        self.call("setLastCellEdited", &[JsValue::from_bool(edited)]);
    }

    fn paste_over_cells(&mut self) {
        self.call("pasteOverCells", &[]);
    }
}

type Handler = Closure<dyn FnMut(Event)>;

/// The open textarea and the listeners attached to it.
struct Overlay {
    textarea: TextareaOverlay,
    _handlers: Vec<Handler>,
}

/// The in-place editor exported to JavaScript.
///
/// Every method takes `&self` so the grid can call `destroy()` while
/// `open()` or an event handler is still on the stack.
#[wasm_bindgen]
pub struct InPlaceEdit {
    editor: SharedEditor,
    host: JsGridHost,
    overlay: RefCell<Option<Overlay>>,
}

#[wasm_bindgen]
impl InPlaceEdit {
    /// Create an editor for `grid`. `classes` is an optional
    /// `{inPlaceEdit, theme}` object.
    #[wasm_bindgen(constructor)]
    pub fn new(grid: JsValue, classes: JsValue) -> Result<InPlaceEdit, JsValue> {
        console_error_panic_hook::set_once();
        let classes: EditorClasses = if is_absent(&classes) {
            EditorClasses::default()
        } else {
            serde_wasm_bindgen::from_value(classes)?
        };
        Ok(InPlaceEdit {
            editor: SharedEditor::new(classes),
            host: JsGridHost::new(grid),
            overlay: RefCell::new(None),
        })
    }

    /// Open the editor over `target` (`{sheet, row, col}`) or the active cell.
    ///
    /// Returns whether a textarea was created.
    #[wasm_bindgen]
    pub fn open(&self, target: JsValue, selected: bool) -> Result<bool, JsValue> {
        let target: Option<CellLoc> = if is_absent(&target) {
            None
        } else {
            Some(serde_wasm_bindgen::from_value(target)?)
        };

        self.close();

        let mut host = self.host.clone();
        let Some(session) = self.editor.open(&mut host, target, selected) else {
            return Ok(false);
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let pane = self
            .host
            .pane()
            .ok_or_else(|| JsValue::from_str("grid pane is not an element"))?;
        let Some(textarea) =
            TextareaOverlay::create(&document, &pane, &self.editor.classes().class_attr())
        else {
            return Err(JsValue::from_str("could not create textarea"));
        };

        textarea.place(session.placement.style().as_deref());
        textarea.load(&session.text, session.selected);
        let handlers = self.wire_events(textarea.element());
        *self.overlay.borrow_mut() = Some(Overlay {
            textarea,
            _handlers: handlers,
        });
        Ok(true)
    }

    /// Close the editor. Returns whether the text was changed, or
    /// `undefined` when nothing was open.
    #[wasm_bindgen]
    pub fn destroy(&self) -> Option<bool> {
        self.close()
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.editor.is_open()
    }

    #[wasm_bindgen]
    pub fn value(&self) -> Option<String> {
        self.overlay
            .borrow()
            .as_ref()
            .map(|o| o.textarea.value())
    }
}

impl InPlaceEdit {
    /// Take the textarea's current text, then close the session and remove
    /// the textarea.
    fn close(&self) -> Option<bool> {
        let overlay = self.overlay.borrow_mut().take();
        if let Some(overlay) = &overlay {
            self.editor.sync_text(&overlay.textarea.value());
        }
        let changed = self.editor.destroy(&mut self.host.clone());
        drop(overlay);
        changed
    }

    fn wire_events(&self, textarea: &HtmlTextAreaElement) -> Vec<Handler> {
        let mut handlers = Vec::new();
        let mut listen = |names: &[&str], handler: Handler| {
            for name in names {
                textarea
                    .add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())
                    .ok();
            }
            handlers.push(handler);
        };

        // Handlers own clones of the editor and host and borrow nothing
        // across a grid call.
        let (editor, mut host) = (self.editor.clone(), self.host.clone());
        listen(
            &["keydown"],
            Closure::wrap(Box::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = KeyPress {
                    key_code: event.key_code(),
                    shift_key: event.shift_key(),
                };
                if editor.key_down(&mut host, key) == KeyOutcome::Prevent {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(Event)>),
        );

        let (editor, mut host) = (self.editor.clone(), self.host.clone());
        let source = textarea.clone();
        listen(
            &["input", "change", "keyup"],
            Closure::wrap(Box::new(move |_event: Event| {
                editor.input(&mut host, &source.value());
            }) as Box<dyn FnMut(Event)>),
        );

        let (editor, mut host) = (self.editor.clone(), self.host.clone());
        listen(
            &["focus"],
            Closure::wrap(Box::new(move |_event: Event| {
                editor.focus(&mut host);
            }) as Box<dyn FnMut(Event)>),
        );

        let (editor, mut host) = (self.editor.clone(), self.host.clone());
        listen(
            &["blur", "focusout"],
            Closure::wrap(Box::new(move |_event: Event| {
                editor.blur(&mut host);
            }) as Box<dyn FnMut(Event)>),
        );

        let (editor, mut host) = (self.editor.clone(), self.host.clone());
        listen(
            &["paste"],
            Closure::wrap(Box::new(move |_event: Event| {
                editor.paste(&mut host);
            }) as Box<dyn FnMut(Event)>),
        );

        handlers
    }
}
