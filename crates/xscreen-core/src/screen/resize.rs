//! Per-resize reconciliation pass

use xscreen_hal::Host;

use super::Inner;

impl<H: Host> Inner<H> {
    /// Recompute orientation, then relock, reconcile tips and notify
    ///
    /// Each step walks a snapshot of its registrations in order, so host
    /// callbacks and listeners may register more targets, tips or listeners.
    /// Those take effect from the next pass.
    pub(super) fn handle_resize(&self) {
        let orientation = self.detect();

        // Host calls below may re-enter the controller, so no borrow is held
        let (lock_targets, tips, listeners) = {
            let mut state = self.state.borrow_mut();
            state.orientation = orientation;
            (
                state.lock_targets.clone(),
                state.tips.clone(),
                state.listeners.clone(),
            )
        };

        for target in &lock_targets {
            self.apply_lock(target, orientation);
        }
        for tip in &tips {
            self.reconcile_tip(tip, orientation);
        }

        for listener in &listeners {
            listener(orientation);
        }
    }
}
