//! Forced-orientation lock targets

use xscreen_hal::Host;

use super::{Inner, Screen};
use crate::orientation::Orientation;
use crate::registration::{LockConfig, LockTarget};
use crate::style::lock_style_for;

impl<H: Host> Screen<H> {
    /// Keep a container displayed in a fixed orientation
    ///
    /// The style is applied immediately and again after every resize.
    /// A config without `mode` or `element` is dropped silently.
    pub fn lock(&self, config: LockConfig<H::Element>) {
        let target = match config.validate(&self.inner.config) {
            Ok(target) => target,
            Err(e) => {
                self.inner
                    .host
                    .debug(&format!("[xscreen] lock ignored: {}", e));
                return;
            }
        };

        let orientation = self.orientation();
        self.inner.apply_lock(&target, orientation);
        self.inner.state.borrow_mut().lock_targets.push(target);
    }
}

impl<H: Host> Inner<H> {
    /// Write the style a target needs for the given orientation
    pub(super) fn apply_lock(&self, target: &LockTarget<H::Element>, orientation: Orientation) {
        let client = match self.host.client_size() {
            Ok(client) => client,
            Err(e) => {
                self.host
                    .warn(&format!("[xscreen] Cannot lock {} container: {}", target.mode, e));
                return;
            }
        };

        let style = lock_style_for(target.mode, orientation, client, target.z_index);
        self.host.set_style(&target.element, &style.to_css());
    }
}
