//! Orientation change subscriptions

use std::rc::Rc;

use xscreen_hal::Host;

use super::Screen;
use crate::orientation::Orientation;

/// A callback with its context already bound
pub(super) type Listener = Rc<dyn Fn(Orientation)>;

impl<H: Host> Screen<H> {
    /// Subscribe to orientation changes
    ///
    /// After every resize pass `callback` is invoked with `context` and the
    /// new orientation, in subscription order. A `None` callback is dropped
    /// silently.
    pub fn on_orientation_change<C, F>(&self, callback: Option<F>, context: C)
    where
        C: 'static,
        F: Fn(&C, Orientation) + 'static,
    {
        let Some(callback) = callback else {
            self.inner
                .host
                .debug("[xscreen] onOrientationChange ignored: callback is not callable");
            return;
        };

        let listener: Listener = Rc::new(move |orientation| callback(&context, orientation));
        self.inner.state.borrow_mut().listeners.push(listener);
    }
}
