//! Reading registration configs from plain JS objects
//!
//! Fields that are absent, `undefined`, `null` or of the wrong type read as
//! missing, so the core applies its defaults or drops the registration.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use xscreen_core::{LockConfig, LockMode, ScreenError, TipConfig};

/// Read a property, treating `undefined` and `null` as absent
fn field(config: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(config, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn string_field(config: &JsValue, key: &str) -> Option<String> {
    field(config, key).and_then(|value| value.as_string())
}

fn z_index_field(config: &JsValue) -> Option<i32> {
    field(config, "zIndex")
        .and_then(|value| value.as_f64())
        .filter(|z| z.is_finite())
        .map(|z| z as i32)
}

/// Parse `mode`; an empty string reads as missing
fn mode_field(config: &JsValue) -> Result<Option<LockMode>, ScreenError> {
    match string_field(config, "mode").filter(|mode| !mode.is_empty()) {
        Some(mode) => LockMode::from_id(&mode)
            .map(Some)
            .ok_or(ScreenError::InvalidMode(mode)),
        None => Ok(None),
    }
}

/// `{ mode, $wrapper | element, zIndex }`
pub(crate) fn lock_config(config: &JsValue) -> Result<LockConfig<Element>, ScreenError> {
    let element = field(config, "$wrapper")
        .or_else(|| field(config, "element"))
        .and_then(|value| value.dyn_into::<Element>().ok());

    Ok(LockConfig {
        mode: mode_field(config)?,
        element,
        z_index: z_index_field(config),
    })
}

/// `{ mode, id, logo, text, zIndex }`
pub(crate) fn tip_config(config: &JsValue) -> Result<TipConfig, ScreenError> {
    Ok(TipConfig {
        mode: mode_field(config)?,
        id: string_field(config, "id"),
        logo: string_field(config, "logo"),
        text: string_field(config, "text"),
        z_index: z_index_field(config),
    })
}
