//! JS-facing `Screen` class
//!
//! ```js
//! const xScreen = new Screen()
//! xScreen.lock({ mode: 'landscape', $wrapper: document.getElementById('J_landscape') })
//! xScreen.inform({ mode: 'landscape', id: 'J_landscapeTips' })
//! xScreen.onOrientationChange(orientation => console.log(orientation), this)
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use xscreen_core::{Host, Orientation, Screen, ScreenConfig};

use crate::convert;
use crate::host::WebHost;
use crate::util::{self, describe_js_value};

/// wasm-bindgen wrapper around the orientation controller
#[wasm_bindgen(js_name = Screen)]
pub struct JsScreen {
    screen: Screen<WebHost>,
}

#[wasm_bindgen(js_class = Screen)]
impl JsScreen {
    /// Create a controller for the current page
    ///
    /// `config_json` is an optional JSON object, e.g.
    /// `{"lockZIndex": 301, "tipZIndex": 310, "portraitText": "..."}`.
    /// Throws if there is no window/document or the JSON is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<JsScreen, JsValue> {
        // Set up panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => ScreenConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => ScreenConfig::default(),
        };
        let host = WebHost::new().map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            screen: Screen::with_config(host, config),
        })
    }

    /// Current orientation: "landscape", "portrait" or "unknown"
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> String {
        self.screen.orientation().id().to_string()
    }

    /// Keep a container displayed in a fixed orientation
    ///
    /// `{ mode: 'portrait' | 'landscape', $wrapper: HTMLElement, zIndex?: number }`
    pub fn lock(&self, config: JsValue) {
        match convert::lock_config(&config) {
            Ok(config) => self.screen.lock(config),
            Err(e) => self.screen.host().debug(&format!("[xscreen] lock ignored: {}", e)),
        }
    }

    /// Show a rotate prompt when the page is not in `mode`
    ///
    /// `{ mode, id, logo?: string, text?: string, zIndex?: number }`
    pub fn inform(&self, config: JsValue) {
        match convert::tip_config(&config) {
            Ok(config) => self.screen.inform(config),
            Err(e) => self
                .screen
                .host()
                .debug(&format!("[xscreen] inform ignored: {}", e)),
        }
    }

    /// Call `callback` with `context` as `this` after every orientation check
    ///
    /// A non-function callback is ignored.
    #[wasm_bindgen(js_name = onOrientationChange)]
    pub fn on_orientation_change(&self, callback: JsValue, context: JsValue) {
        let callback = callback.dyn_into::<js_sys::Function>().ok().map(|function| {
            move |context: &JsValue, orientation: Orientation| {
                let arg = JsValue::from_str(orientation.id());
                if let Err(e) = function.call1(context, &arg) {
                    util::warn(&format!(
                        "[xscreen] Orientation listener threw: {}",
                        describe_js_value(&e)
                    ));
                }
            }
        });
        self.screen.on_orientation_change(callback, context);
    }

    /// Route verbose diagnostics to the console
    #[wasm_bindgen(js_name = setVerbose)]
    pub fn set_verbose(&self, verbose: bool) {
        self.screen.host().set_verbose(verbose);
    }

    /// Number of registered lock targets
    #[wasm_bindgen(getter, js_name = lockCount)]
    pub fn lock_count(&self) -> usize {
        self.screen.lock_count()
    }

    /// Number of registered tips
    #[wasm_bindgen(getter, js_name = tipCount)]
    pub fn tip_count(&self) -> usize {
        self.screen.tip_count()
    }

    /// Number of registered orientation change listeners
    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.screen.listener_count()
    }
}
