//! Rotate-prompt overlays

use std::rc::Rc;

use xscreen_hal::{Host, HostError, TipOverlay};

use super::{Inner, Screen};
use crate::orientation::Orientation;
use crate::overlay::{tip_markup, tip_stylesheet};
use crate::registration::{TipConfig, TipRegistration};

impl<H: Host> Screen<H> {
    /// Show a rotate prompt whenever the page is not in the tip's mode
    ///
    /// The stylesheet is injected and the tip is registered immediately.
    /// The overlay itself is inserted only once its logo has loaded; if the
    /// logo fails to load a warning is logged and the overlay never appears.
    /// A config without `mode` or `id` is dropped silently.
    pub fn inform(&self, config: TipConfig) {
        let tip = match config.resolve(&self.inner.config) {
            Ok(tip) => tip,
            Err(e) => {
                self.inner
                    .host
                    .debug(&format!("[xscreen] inform ignored: {}", e));
                return;
            }
        };

        self.inner
            .host
            .inject_stylesheet(&tip_stylesheet(&tip.id, tip.z_index));

        let registration = tip.registration();
        self.inner
            .state
            .borrow_mut()
            .tips
            .push(registration.clone());

        let weak = Rc::downgrade(&self.inner);
        let text = tip.text;
        self.inner.host.preload_image(
            &tip.logo,
            Box::new(move |result| {
                if let Some(inner) = weak.upgrade() {
                    inner.finish_tip(&registration, &text, result);
                }
            }),
        );
    }
}

impl<H: Host> Inner<H> {
    /// Insert the overlay once its logo has settled, then reconcile it
    fn finish_tip(
        &self,
        registration: &TipRegistration,
        text: &str,
        logo: Result<String, HostError>,
    ) {
        let src = match logo {
            Ok(src) => src,
            Err(e) => {
                self.host.warn(&format!(
                    "[xscreen] Tip '{}' will not be shown: {}",
                    registration.id, e
                ));
                return;
            }
        };

        let overlay = TipOverlay {
            id: registration.id.clone(),
            markup: tip_markup(text, &src),
        };
        if let Err(e) = self.host.append_tip(&overlay) {
            self.host.warn(&format!(
                "[xscreen] Failed to insert tip '{}': {}",
                registration.id, e
            ));
            return;
        }

        let orientation = self.state.borrow().orientation;
        self.reconcile_tip(registration, orientation);
    }

    /// Show the tip unless the page is already in the tip's mode
    ///
    /// A tip whose node is not in the document yet is skipped.
    pub(super) fn reconcile_tip(&self, tip: &TipRegistration, orientation: Orientation) {
        let visible = !tip.mode.matches(orientation);
        if !self.host.set_tip_visible(&tip.id, visible) {
            self.host
                .debug(&format!("[xscreen] Tip '{}' not in document yet", tip.id));
        }
    }
}
