//! Shared utilities for the browser crate

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    /// console.warn binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);
}

/// Best-effort human readable text for a thrown JS value
///
/// Uses the value itself if it is a string, then its `message` property,
/// then its `type` property (for DOM events), then its debug form.
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    ["message", "type"]
        .iter()
        .find_map(|key| {
            js_sys::Reflect::get(value, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
