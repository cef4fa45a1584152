//! Mock host implementation for testing xscreen
//!
//! This provides an in-memory implementation of the `Host` trait so the
//! orientation controller can be unit tested without a browser.
//!
//! Viewport changes are driven explicitly with [`MockHost::resize`], and
//! image preloads stay pending until a test resolves them with
//! [`MockHost::complete_next_image`] or [`MockHost::fail_next_image`].

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use xscreen_hal::{
    Host, HostError, ImageCallback, ResizeHandler, Size, TipOverlay, TIP_CLASS, TIP_SHOW_CLASS,
};

/// Handle to a simulated container node
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockElement(pub u32);

/// Simulated overlay node
#[derive(Clone, Debug)]
struct MockNode {
    markup: String,
    classes: BTreeSet<String>,
}

/// Image load waiting for the test to settle it
struct PendingImage {
    src: String,
    done: ImageCallback,
}

/// Mock host for unit testing
pub struct MockHost {
    /// Simulated device screen
    screen: Cell<Size>,
    /// Simulated document client area
    client: Cell<Size>,
    /// When set, metric queries fail
    metrics_unavailable: Cell<bool>,
    /// Registered resize handler
    resize_handler: RefCell<Option<ResizeHandler>>,
    /// Number of `on_resize` subscriptions received
    resize_subscriptions: Cell<usize>,
    /// Next element handle to hand out
    next_element: Cell<u32>,
    /// Inline style text per element, plus how many times it was written
    styles: RefCell<BTreeMap<MockElement, (String, usize)>>,
    /// Injected stylesheet blocks, in order
    stylesheets: RefCell<Vec<String>>,
    /// Nodes addressable by DOM id
    nodes: RefCell<BTreeMap<String, MockNode>>,
    /// Image loads not yet settled, in start order
    pending_images: RefCell<VecDeque<PendingImage>>,
    /// Captured warnings
    warnings: RefCell<Vec<String>>,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
}

impl MockHost {
    /// Create a mock host with the given screen and client sizes
    pub fn new(screen: Size, client: Size) -> Self {
        Self {
            screen: Cell::new(screen),
            client: Cell::new(client),
            metrics_unavailable: Cell::new(false),
            resize_handler: RefCell::new(None),
            resize_subscriptions: Cell::new(0),
            next_element: Cell::new(1),
            styles: RefCell::new(BTreeMap::new()),
            stylesheets: RefCell::new(Vec::new()),
            nodes: RefCell::new(BTreeMap::new()),
            pending_images: RefCell::new(VecDeque::new()),
            warnings: RefCell::new(Vec::new()),
            debug_log: RefCell::new(Vec::new()),
        }
    }

    /// A 375x812 phone held in portrait
    pub fn phone_portrait() -> Self {
        Self::new(Size::new(375, 812), Size::new(375, 812))
    }

    /// A 375x812 phone held in landscape
    pub fn phone_landscape() -> Self {
        Self::new(Size::new(375, 812), Size::new(812, 375))
    }

    // === Viewport ===

    /// Change the client area and fire the resize handler, like a browser would
    pub fn resize(&self, client: Size) {
        self.client.set(client);
        self.fire_resize();
    }

    /// Swap the client width and height and fire the resize handler
    pub fn rotate(&self) {
        self.resize(self.client.get().swapped());
    }

    /// Fire the resize handler without changing any metric
    pub fn fire_resize(&self) {
        let handler = self.resize_handler.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler();
            let mut slot = self.resize_handler.borrow_mut();
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }

    /// Set the simulated client area without firing resize
    pub fn set_client_size(&self, client: Size) {
        self.client.set(client);
    }

    /// Set the simulated device screen
    pub fn set_screen_size(&self, screen: Size) {
        self.screen.set(screen);
    }

    /// Make metric queries fail (or succeed again)
    pub fn set_metrics_unavailable(&self, unavailable: bool) {
        self.metrics_unavailable.set(unavailable);
    }

    /// Number of resize subscriptions received
    pub fn resize_subscription_count(&self) -> usize {
        self.resize_subscriptions.get()
    }

    // === Elements ===

    /// Create a new container handle
    pub fn create_element(&self) -> MockElement {
        let id = self.next_element.get();
        self.next_element.set(id + 1);
        MockElement(id)
    }

    /// Current inline style text of an element
    pub fn style_of(&self, element: MockElement) -> Option<String> {
        self.styles.borrow().get(&element).map(|(css, _)| css.clone())
    }

    /// How many times an element's style was written
    pub fn style_write_count(&self, element: MockElement) -> usize {
        self.styles
            .borrow()
            .get(&element)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    // === Stylesheets and nodes ===

    /// All injected stylesheet blocks
    pub fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.borrow().clone()
    }

    /// Insert a bare node with the given DOM id, as if the page had it already
    pub fn insert_node(&self, id: &str) {
        self.nodes.borrow_mut().insert(
            id.to_string(),
            MockNode {
                markup: String::new(),
                classes: BTreeSet::new(),
            },
        );
    }

    /// Whether a node with the given DOM id exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.borrow().contains_key(id)
    }

    /// Number of nodes in the simulated document
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Inner markup of the node with the given DOM id
    pub fn node_markup(&self, id: &str) -> Option<String> {
        self.nodes.borrow().get(id).map(|node| node.markup.clone())
    }

    /// Whether the node carries the given class
    pub fn node_has_class(&self, id: &str, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(id)
            .map(|node| node.classes.contains(class))
            .unwrap_or(false)
    }

    /// Visibility of a tip overlay (`None` when the node does not exist)
    pub fn is_tip_visible(&self, id: &str) -> Option<bool> {
        self.nodes
            .borrow()
            .get(id)
            .map(|node| node.classes.contains(TIP_SHOW_CLASS))
    }

    // === Images ===

    /// Number of image loads still pending
    pub fn pending_image_count(&self) -> usize {
        self.pending_images.borrow().len()
    }

    /// Sources of pending image loads, in start order
    pub fn pending_image_sources(&self) -> Vec<String> {
        self.pending_images
            .borrow()
            .iter()
            .map(|pending| pending.src.clone())
            .collect()
    }

    /// Resolve the oldest pending image load successfully
    ///
    /// Returns `false` if nothing was pending.
    pub fn complete_next_image(&self) -> bool {
        let pending = self.pending_images.borrow_mut().pop_front();
        match pending {
            Some(PendingImage { src, done }) => {
                done(Ok(src));
                true
            }
            None => false,
        }
    }

    /// Reject the oldest pending image load
    ///
    /// Returns `false` if nothing was pending.
    pub fn fail_next_image(&self, reason: &str) -> bool {
        let pending = self.pending_images.borrow_mut().pop_front();
        match pending {
            Some(PendingImage { src, done }) => {
                done(Err(HostError::ImageLoad {
                    src,
                    reason: reason.to_string(),
                }));
                true
            }
            None => false,
        }
    }

    // === Diagnostics ===

    /// All captured warnings
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// Check if a warning containing `substr` was logged
    pub fn has_warning_containing(&self, substr: &str) -> bool {
        self.warnings.borrow().iter().any(|msg| msg.contains(substr))
    }

    /// All captured debug messages
    pub fn debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Check if a debug message containing `substr` was logged
    pub fn has_debug_containing(&self, substr: &str) -> bool {
        self.debug_log.borrow().iter().any(|msg| msg.contains(substr))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::phone_portrait()
    }
}

impl Host for MockHost {
    type Element = MockElement;

    fn screen_size(&self) -> Result<Size, HostError> {
        if self.metrics_unavailable.get() {
            return Err(HostError::Unavailable("screen"));
        }
        Ok(self.screen.get())
    }

    fn client_size(&self) -> Result<Size, HostError> {
        if self.metrics_unavailable.get() {
            return Err(HostError::Unavailable("documentElement"));
        }
        Ok(self.client.get())
    }

    fn on_resize(&self, handler: ResizeHandler) {
        self.resize_subscriptions.set(self.resize_subscriptions.get() + 1);
        *self.resize_handler.borrow_mut() = Some(handler);
    }

    fn set_style(&self, element: &Self::Element, css: &str) {
        let mut styles = self.styles.borrow_mut();
        let entry = styles.entry(*element).or_insert_with(|| (String::new(), 0));
        entry.0 = css.to_string();
        entry.1 += 1;
    }

    fn inject_stylesheet(&self, css: &str) {
        self.stylesheets.borrow_mut().push(css.to_string());
    }

    fn append_tip(&self, overlay: &TipOverlay) -> Result<(), HostError> {
        let mut classes = BTreeSet::new();
        classes.insert(TIP_CLASS.to_string());
        // Like appendChild, a second node with the same id shadows lookups
        self.nodes.borrow_mut().insert(
            overlay.id.clone(),
            MockNode {
                markup: overlay.markup.clone(),
                classes,
            },
        );
        Ok(())
    }

    fn set_tip_visible(&self, id: &str, visible: bool) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let Some(node) = nodes.get_mut(id) else {
            return false;
        };
        if visible {
            node.classes.insert(TIP_SHOW_CLASS.to_string());
        } else {
            node.classes.remove(TIP_SHOW_CLASS);
        }
        true
    }

    fn preload_image(&self, src: &str, done: ImageCallback) {
        self.pending_images.borrow_mut().push_back(PendingImage {
            src: src.to_string(),
            done,
        });
    }

    fn warn(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }

    fn debug(&self, msg: &str) {
        self.debug_log.borrow_mut().push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_mock_host_metrics() {
        let host = MockHost::phone_landscape();
        assert_eq!(host.screen_size().unwrap(), Size::new(375, 812));
        assert_eq!(host.client_size().unwrap(), Size::new(812, 375));

        host.set_metrics_unavailable(true);
        assert_eq!(host.screen_size(), Err(HostError::Unavailable("screen")));
        assert!(host.client_size().is_err());
    }

    #[test]
    fn test_mock_host_resize_fires_handler() {
        let host = MockHost::phone_portrait();
        let fired = Rc::new(Cell::new(0));

        let counter = fired.clone();
        host.on_resize(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(host.resize_subscription_count(), 1);

        host.rotate();
        host.rotate();
        assert_eq!(fired.get(), 2);
        assert_eq!(host.client_size().unwrap(), Size::new(375, 812));
    }

    #[test]
    fn test_mock_host_styles() {
        let host = MockHost::default();
        let a = host.create_element();
        let b = host.create_element();
        assert_ne!(a, b);

        assert_eq!(host.style_of(a), None);
        host.set_style(&a, "color: red;");
        host.set_style(&a, "color: blue;");

        assert_eq!(host.style_of(a).as_deref(), Some("color: blue;"));
        assert_eq!(host.style_write_count(a), 2);
        assert_eq!(host.style_write_count(b), 0);
    }

    #[test]
    fn test_mock_host_tip_visibility() {
        let host = MockHost::default();
        assert!(!host.set_tip_visible("missing", true));
        assert_eq!(host.is_tip_visible("missing"), None);

        host.append_tip(&TipOverlay {
            id: "tips".to_string(),
            markup: "<p>rotate</p>".to_string(),
        })
        .unwrap();

        assert!(host.node_has_class("tips", TIP_CLASS));
        assert_eq!(host.is_tip_visible("tips"), Some(false));

        assert!(host.set_tip_visible("tips", true));
        assert_eq!(host.is_tip_visible("tips"), Some(true));

        assert!(host.set_tip_visible("tips", false));
        assert_eq!(host.is_tip_visible("tips"), Some(false));
        assert_eq!(host.node_markup("tips").as_deref(), Some("<p>rotate</p>"));
    }

    #[test]
    fn test_mock_host_image_completion() {
        let host = MockHost::default();
        let result = Rc::new(RefCell::new(None));

        let slot = result.clone();
        host.preload_image("a.png", Box::new(move |r| *slot.borrow_mut() = Some(r)));
        assert_eq!(host.pending_image_count(), 1);
        assert_eq!(host.pending_image_sources(), vec!["a.png".to_string()]);

        assert!(host.complete_next_image());
        assert_eq!(*result.borrow(), Some(Ok("a.png".to_string())));
        assert!(!host.complete_next_image());
    }

    #[test]
    fn test_mock_host_image_failure() {
        let host = MockHost::default();
        let result = Rc::new(RefCell::new(None));

        let slot = result.clone();
        host.preload_image("b.png", Box::new(move |r| *slot.borrow_mut() = Some(r)));
        assert!(host.fail_next_image("404"));

        match result.borrow().as_ref() {
            Some(Err(HostError::ImageLoad { src, reason })) => {
                assert_eq!(src, "b.png");
                assert_eq!(reason, "404");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(host.pending_image_count(), 0);
    }

    #[test]
    fn test_mock_host_diagnostics() {
        let host = MockHost::default();
        host.warn("something broke");
        host.debug("detail");

        assert_eq!(host.warnings().len(), 1);
        assert!(host.has_warning_containing("broke"));
        assert!(!host.has_warning_containing("detail"));
        assert!(host.has_debug_containing("detail"));
    }
}
