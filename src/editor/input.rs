//! DOM `<textarea>` overlay for in-place editing.
//!
//! The textarea is appended to the grid pane and positioned over the cell
//! with an inline style computed by [`Placement`](super::Placement).

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

/// Textarea overlay for one edit session.
pub(crate) struct TextareaOverlay {
    textarea: HtmlTextAreaElement,
}

impl TextareaOverlay {
    /// Create the textarea inside `pane`.
    pub(crate) fn create(document: &Document, pane: &HtmlElement, class: &str) -> Option<Self> {
        let textarea = document
            .create_element("textarea")
            .ok()?
            .dyn_into::<HtmlTextAreaElement>()
            .ok()?;
        textarea.set_class_name(class);
        pane.append_child(&textarea).ok()?;
        Some(TextareaOverlay { textarea })
    }

    pub(crate) fn element(&self) -> &HtmlTextAreaElement {
        &self.textarea
    }

    /// Place the textarea. `None` hides it.
    pub(crate) fn place(&self, style: Option<&str>) {
        match style {
            Some(style) => {
                let _ = self.textarea.set_attribute("style", style);
            }
            None => {
                let _ = self.textarea.style().set_property("display", "none");
            }
        }
    }

    /// Focus with the cursor after `value`, optionally selecting it all.
    pub(crate) fn load(&self, value: &str, select: bool) {
        let _ = self.textarea.focus();
        // Clearing first leaves the caret at the end once the value is set.
        self.textarea.set_value("");
        self.textarea.set_value(value);
        if select {
            self.textarea.select();
        }
    }

    pub(crate) fn value(&self) -> String {
        self.textarea.value()
    }
}

impl Drop for TextareaOverlay {
    fn drop(&mut self) {
        if let Some(parent) = self.textarea.parent_node() {
            let _ = parent.remove_child(&self.textarea);
        }
    }
}
