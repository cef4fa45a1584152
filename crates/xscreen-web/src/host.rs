//! Browser host implementation
//!
//! Implements the xscreen `Host` trait on top of `web-sys`: the device
//! screen and document client area for metrics, a window `resize` listener,
//! inline `style` attributes, `<style>` blocks in the document head, overlay
//! nodes in the body and `HtmlImageElement` for logo preloading.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlImageElement, Window};
use xscreen_hal::{
    Host, HostError, ImageCallback, ResizeHandler, Size, TipOverlay, TIP_CLASS, TIP_SHOW_CLASS,
};

use crate::util::{self, describe_js_value};

/// Host backed by the page's `window` and `document`
pub struct WebHost {
    window: Window,
    document: Document,
    /// Installed resize listener, kept alive until the host is dropped
    resize_listener: RefCell<Option<Closure<dyn FnMut()>>>,
    /// Whether `debug` messages reach the console
    verbose: Cell<bool>,
}

impl WebHost {
    /// Create a host for the current page
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(HostError::Unavailable("document"))?;
        Ok(Self {
            window,
            document,
            resize_listener: RefCell::new(None),
            verbose: Cell::new(false),
        })
    }

    /// Enable or disable verbose console output
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.set(verbose);
    }

    fn remove_resize_listener(&self) {
        if let Some(listener) = self.resize_listener.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        self.remove_resize_listener();
    }
}

/// Convert a DOM exception into a host error
fn dom_error(err: JsValue) -> HostError {
    HostError::Dom(describe_js_value(&err))
}

/// Clamp a DOM dimension to an unsigned pixel count
fn pixels(value: i32) -> u32 {
    value.max(0) as u32
}

impl Host for WebHost {
    type Element = Element;

    fn screen_size(&self) -> Result<Size, HostError> {
        let screen = self.window.screen().map_err(dom_error)?;
        let width = screen.width().map_err(dom_error)?;
        let height = screen.height().map_err(dom_error)?;
        Ok(Size::new(pixels(width), pixels(height)))
    }

    fn client_size(&self) -> Result<Size, HostError> {
        let root = self
            .document
            .document_element()
            .ok_or(HostError::Unavailable("documentElement"))?;
        Ok(Size::new(
            pixels(root.client_width()),
            pixels(root.client_height()),
        ))
    }

    fn on_resize(&self, handler: ResizeHandler) {
        self.remove_resize_listener();

        let listener = Closure::wrap(handler);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        {
            util::warn(&format!(
                "[xscreen] Failed to subscribe to resize: {}",
                describe_js_value(&e)
            ));
            return;
        }
        *self.resize_listener.borrow_mut() = Some(listener);
    }

    fn set_style(&self, element: &Self::Element, css: &str) {
        if let Err(e) = element.set_attribute("style", css) {
            util::warn(&format!(
                "[xscreen] Failed to set style: {}",
                describe_js_value(&e)
            ));
        }
    }

    fn inject_stylesheet(&self, css: &str) {
        let result = (|| -> Result<(), HostError> {
            let head = self.document.head().ok_or(HostError::Unavailable("head"))?;
            let style = self.document.create_element("style").map_err(dom_error)?;
            style.set_text_content(Some(css));
            head.append_child(&style).map_err(dom_error)?;
            Ok(())
        })();

        if let Err(e) = result {
            util::warn(&format!("[xscreen] Failed to inject stylesheet: {}", e));
        }
    }

    fn append_tip(&self, overlay: &TipOverlay) -> Result<(), HostError> {
        let body = self.document.body().ok_or(HostError::Unavailable("body"))?;
        let node = self.document.create_element("div").map_err(dom_error)?;
        node.set_id(&overlay.id);
        node.set_class_name(TIP_CLASS);
        node.set_inner_html(&overlay.markup);
        body.append_child(&node).map_err(dom_error)?;
        Ok(())
    }

    fn set_tip_visible(&self, id: &str, visible: bool) -> bool {
        let Some(node) = self.document.get_element_by_id(id) else {
            return false;
        };

        let classes = node.class_list();
        let result = if visible {
            classes.add_1(TIP_SHOW_CLASS)
        } else {
            classes.remove_1(TIP_SHOW_CLASS)
        };
        if let Err(e) = result {
            util::warn(&format!(
                "[xscreen] Failed to toggle tip '{}': {}",
                id,
                describe_js_value(&e)
            ));
        }
        true
    }

    fn preload_image(&self, src: &str, done: ImageCallback) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                done(Err(HostError::ImageLoad {
                    src: src.to_string(),
                    reason: describe_js_value(&e),
                }));
                return;
            }
        };

        // Settles once, on whichever of load/error fires first
        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(src);

        let src = src.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(loaded).await;
            image.set_onload(None);
            image.set_onerror(None);

            done(match result {
                Ok(_) => Ok(image.src()),
                Err(e) => Err(HostError::ImageLoad {
                    src,
                    reason: describe_js_value(&e),
                }),
            });
        });
    }

    fn warn(&self, msg: &str) {
        util::warn(msg);
    }

    fn debug(&self, msg: &str) {
        if self.verbose.get() {
            util::log(msg);
        }
    }
}
