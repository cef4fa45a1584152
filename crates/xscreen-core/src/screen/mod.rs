//! Orientation controller
//!
//! This module is split into focused submodules:
//! - `lock`: Forced-orientation lock targets
//! - `inform`: Rotate-prompt overlays and their async materialization
//! - `listeners`: Orientation change subscriptions
//! - `resize`: The per-resize reconciliation pass

mod inform;
mod listeners;
mod lock;
mod resize;

use std::cell::RefCell;
use std::rc::Rc;

use xscreen_hal::Host;

use crate::config::ScreenConfig;
use crate::orientation::{detect_orientation, Orientation};
use crate::registration::{LockTarget, TipRegistration};

use listeners::Listener;

/// Orientation controller for one page
///
/// Tracks the current orientation, keeps registered containers rotated into
/// their locked orientation, toggles rotate-prompt overlays and notifies
/// subscribers. Everything is driven by the host's resize notification,
/// subscribed to once at construction.
///
/// Registrations are permanent: there is no unlock or unsubscribe.
pub struct Screen<H: Host> {
    inner: Rc<Inner<H>>,
}

/// State shared between the controller and the callbacks it hands to the host
pub(crate) struct Inner<H: Host> {
    host: H,
    config: ScreenConfig,
    state: RefCell<State<H::Element>>,
}

/// Mutable controller state, only touched on the event-loop thread
struct State<E> {
    orientation: Orientation,
    lock_targets: Vec<LockTarget<E>>,
    tips: Vec<TipRegistration>,
    listeners: Vec<Listener>,
}

impl<H: Host> Screen<H> {
    /// Create a controller with default configuration
    pub fn new(host: H) -> Self {
        Self::with_config(host, ScreenConfig::default())
    }

    /// Create a controller with the given configuration
    pub fn with_config(host: H, config: ScreenConfig) -> Self {
        let orientation = Inner::<H>::detect_with(&host);
        let inner = Rc::new(Inner {
            host,
            config,
            state: RefCell::new(State {
                orientation,
                lock_targets: Vec::new(),
                tips: Vec::new(),
                listeners: Vec::new(),
            }),
        });

        let weak = Rc::downgrade(&inner);
        inner.host.on_resize(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handle_resize();
            }
        }));

        inner
            .host
            .debug(&format!("[xscreen] Initial orientation: {}", orientation));

        Self { inner }
    }

    /// Current inferred orientation
    pub fn orientation(&self) -> Orientation {
        self.inner.state.borrow().orientation
    }

    /// The host this controller runs against
    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Active configuration
    pub fn config(&self) -> &ScreenConfig {
        &self.inner.config
    }

    /// Run the reconciliation pass now, as if the viewport had been resized
    pub fn handle_resize(&self) {
        self.inner.handle_resize();
    }

    /// Number of registered lock targets
    pub fn lock_count(&self) -> usize {
        self.inner.state.borrow().lock_targets.len()
    }

    /// Number of registered tips
    pub fn tip_count(&self) -> usize {
        self.inner.state.borrow().tips.len()
    }

    /// Number of registered orientation change listeners
    pub fn listener_count(&self) -> usize {
        self.inner.state.borrow().listeners.len()
    }
}

impl<H: Host> Inner<H> {
    /// Infer orientation from the host's current metrics
    ///
    /// Metrics the host cannot provide read as `Unknown`.
    fn detect_with(host: &H) -> Orientation {
        match (host.screen_size(), host.client_size()) {
            (Ok(screen), Ok(client)) => detect_orientation(screen, client.width),
            (Err(e), _) | (_, Err(e)) => {
                host.debug(&format!("[xscreen] Cannot detect orientation: {}", e));
                Orientation::Unknown
            }
        }
    }

    fn detect(&self) -> Orientation {
        Self::detect_with(&self.host)
    }
}
