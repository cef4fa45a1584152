//! Host abstraction for xscreen
//!
//! This crate defines the `Host` trait that lets the orientation controller
//! run against different rendering surfaces (a real browser page, or an
//! in-memory mock in tests) by abstracting every DOM and window operation
//! it needs.
//!
//! # Host Implementations
//!
//! - **Browser**: `xscreen-web::WebHost` using `web-sys` (`window.screen`,
//!   `documentElement.clientWidth`, `resize` events, `HtmlImageElement`)
//! - **Mock**: `xscreen-hal-mock::MockHost` with simulated viewport and
//!   manually resolved image loads

use thiserror::Error;

/// Handler invoked on every viewport resize notification
pub type ResizeHandler = Box<dyn FnMut()>;

/// Completion callback for an image preload
///
/// Receives the resolved image source on success. Invoked exactly once.
pub type ImageCallback = Box<dyn FnOnce(Result<String, HostError>)>;

/// Width/height pair in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shorter of the two sides
    #[inline]
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Longer of the two sides
    #[inline]
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// The same size with width and height exchanged
    #[inline]
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// A rotate-prompt overlay ready to be inserted into the page
///
/// The host creates a `div` with the given `id` and the `screentips` class
/// and sets `markup` as its inner HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipOverlay {
    /// DOM id of the overlay node
    pub id: String,
    /// Inner HTML of the overlay node
    pub markup: String,
}

/// Class carried by every tip overlay node
pub const TIP_CLASS: &str = "screentips";

/// Class toggled on a tip overlay node to make it visible
pub const TIP_SHOW_CLASS: &str = "show";

/// Host errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    /// A platform object (window, document, screen, body...) is missing
    #[error("{0} is not available")]
    Unavailable(&'static str),
    /// An image failed to load
    #[error("failed to load image {src}: {reason}")]
    ImageLoad { src: String, reason: String },
    /// A DOM operation was rejected
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Rendering surface the orientation controller runs against
///
/// All methods are called on the single event-loop thread. Implementations
/// use interior mutability where they need to record state.
///
/// # Associated Types
///
/// - `Element`: a borrowed reference to a page container. The controller
///   stores clones of it but never owns the underlying node's lifecycle.
pub trait Host: 'static {
    /// Reference to a container node that can receive inline styles
    type Element: Clone + 'static;

    // === Metrics ===

    /// Device screen width/height
    ///
    /// In a browser: `window.screen.width` / `window.screen.height`
    fn screen_size(&self) -> Result<Size, HostError>;

    /// Rendered client width/height of the document
    ///
    /// In a browser: `document.documentElement.clientWidth` / `clientHeight`
    fn client_size(&self) -> Result<Size, HostError>;

    // === Events ===

    /// Subscribe to viewport resize notifications
    ///
    /// Called once per controller. The handler runs synchronously for each
    /// notification, with no debouncing.
    fn on_resize(&self, handler: ResizeHandler);

    // === DOM ===

    /// Replace the inline style text of `element`
    fn set_style(&self, element: &Self::Element, css: &str);

    /// Append a stylesheet block to the document
    fn inject_stylesheet(&self, css: &str);

    /// Create the overlay node and append it to the document body
    fn append_tip(&self, overlay: &TipOverlay) -> Result<(), HostError>;

    /// Add or remove the show class on the node with DOM id `id`
    ///
    /// # Returns
    /// * `true` - The node exists and its class list was updated
    /// * `false` - No node has that id
    fn set_tip_visible(&self, id: &str, visible: bool) -> bool;

    // === Assets ===

    /// Start loading an image (returns immediately)
    ///
    /// `done` is invoked exactly once, from the event loop, when the load
    /// settles. There is no timeout and no cancellation.
    fn preload_image(&self, src: &str, done: ImageCallback);

    // === Diagnostics ===

    /// Write a warning to the platform's diagnostic sink
    fn warn(&self, msg: &str);

    /// Write a verbose diagnostic message
    fn debug(&self, _msg: &str) {
        // Default: dropped
    }
}
