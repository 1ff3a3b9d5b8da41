//! WASM bindings for browser-based editing.
//!
//! This module exposes the renderer and the editor model to JavaScript via
//! wasm-bindgen. Offsets cross the boundary as UTF-16 code units, the unit
//! `HTMLTextAreaElement.selectionStart` uses.

use wasm_bindgen::prelude::*;

use crate::editor::{Editor, ToolbarAction};
use crate::util::{byte_to_utf16_offset, utf16_to_byte_offset};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render Markdown to HTML.
#[wasm_bindgen]
pub fn render(markdown: &str) -> String {
    crate::render(markdown)
}

/// Extract a video ID from a pasted URL.
#[wasm_bindgen(js_name = extractVideoId)]
pub fn extract_video_id(url: &str) -> String {
    crate::extract_video_id(url)
}

/// Editor handle owned by the page.
#[wasm_bindgen(js_name = Editor)]
pub struct WasmEditor {
    inner: Editor,
}

#[wasm_bindgen(js_class = Editor)]
impl WasmEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(text: Option<String>) -> WasmEditor {
        WasmEditor {
            inner: Editor::from_text(text.unwrap_or_default()),
        }
    }

    /// Load raw file bytes (e.g. from a `FileReader`).
    #[wasm_bindgen(js_name = loadBytes)]
    pub fn load_bytes(&mut self, data: &[u8]) {
        self.inner.load_bytes(data);
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
    }

    pub fn text(&self) -> String {
        self.inner.text().to_string()
    }

    /// HTML for the rendered view and the clipboard.
    pub fn html(&self) -> String {
        self.inner.html().to_string()
    }

    /// HTML escaped for display as text.
    #[wasm_bindgen(js_name = rawView)]
    pub fn raw_view(&self) -> String {
        self.inner.raw_view()
    }

    /// Select a range given in UTF-16 offsets.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), JsValue> {
        let text = self.inner.text();
        let start = utf16_to_byte_offset(text, start);
        let end = utf16_to_byte_offset(text, end);
        self.inner
            .select(start, end)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = selectionStart)]
    pub fn selection_start(&self) -> usize {
        byte_to_utf16_offset(self.inner.text(), self.inner.selection().start)
    }

    #[wasm_bindgen(getter, js_name = selectionEnd)]
    pub fn selection_end(&self) -> usize {
        byte_to_utf16_offset(self.inner.text(), self.inner.selection().end)
    }

    /// Run a toolbar action by name (`bold`, `h2`, `link`, ...).
    ///
    /// `link`, `video` and `local-video` take their URL as `arg`.
    pub fn apply(&mut self, action: &str, arg: Option<String>) -> Result<(), JsValue> {
        ToolbarAction::parse(action, arg.as_deref())
            .and_then(|action| self.inner.apply(&action))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
