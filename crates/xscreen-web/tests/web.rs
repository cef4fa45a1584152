//! Browser tests for the JS-facing Screen class
//!
//! Run with `wasm-pack test --headless --chrome crates/xscreen-web`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use xscreen_web::JsScreen;

wasm_bindgen_test_configure!(run_in_browser);

fn object(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn test_orientation_is_reported() {
    let screen = JsScreen::new(None).unwrap();
    let orientation = screen.orientation();
    assert!(["landscape", "portrait", "unknown"].contains(&orientation.as_str()));
}

#[wasm_bindgen_test]
fn test_lock_styles_wrapper() {
    let screen = JsScreen::new(None).unwrap();
    let wrapper = document().create_element("div").unwrap();

    screen.lock(object(&[
        ("mode", JsValue::from_str("landscape")),
        ("$wrapper", wrapper.clone().into()),
        ("zIndex", JsValue::from_f64(301.0)),
    ]));

    assert_eq!(screen.lock_count(), 1);
    let style = wrapper.get_attribute("style").unwrap();
    assert!(style.contains("position: fixed"));
    assert!(style.contains("z-index: 301"));
}

#[wasm_bindgen_test]
fn test_invalid_registrations_do_not_throw() {
    let screen = JsScreen::new(None).unwrap();

    screen.lock(JsValue::UNDEFINED);
    screen.lock(object(&[("mode", JsValue::from_str("sideways"))]));
    screen.inform(object(&[]));
    screen.on_orientation_change(JsValue::NULL, JsValue::UNDEFINED);

    assert_eq!(screen.lock_count(), 0);
    assert_eq!(screen.tip_count(), 0);
    assert_eq!(screen.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_inform_injects_stylesheet() {
    let screen = JsScreen::new(None).unwrap();
    screen.inform(object(&[
        ("mode", JsValue::from_str("portrait")),
        ("id", JsValue::from_str("xscreen_test_tips")),
    ]));

    assert_eq!(screen.tip_count(), 1);
    let head = document().head().unwrap().inner_html();
    assert!(head.contains("#xscreen_test_tips.screentips"));
}

#[wasm_bindgen_test]
fn test_config_json() {
    assert!(JsScreen::new(Some(r#"{"tipZIndex": 900}"#.to_string())).is_ok());
    assert!(JsScreen::new(Some("{ broken".to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_listener_called_with_context_on_resize() {
    let screen = JsScreen::new(None).unwrap();
    let context = js_sys::Object::new();
    let callback = js_sys::Function::new_with_args(
        "orientation",
        "this.orientation = orientation; this.calls = (this.calls || 0) + 1;",
    );

    screen.on_orientation_change(callback.into(), context.clone().into());
    assert_eq!(screen.listener_count(), 1);

    let event = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();

    let calls = js_sys::Reflect::get(&context, &JsValue::from_str("calls")).unwrap();
    assert_eq!(calls.as_f64(), Some(1.0));
    let seen = js_sys::Reflect::get(&context, &JsValue::from_str("orientation"))
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(seen, screen.orientation());
}
