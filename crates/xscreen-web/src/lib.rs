//! Browser bindings for xscreen
//!
//! This crate runs on the page's main thread. It provides the `web-sys`
//! implementation of the xscreen host and exports the controller to
//! JavaScript as the `Screen` class.
//!
//! ## Module Structure
//!
//! - `host` - `WebHost`, the browser `Host` implementation
//! - `screen` - The `Screen` class exported to JS
//! - `convert` - Reading lock/tip configs from JS objects
//! - `util` - Console bindings

// =============================================================================
// Module declarations
// =============================================================================

mod convert;
pub(crate) mod host;
mod screen;
pub(crate) mod util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use host::WebHost;
pub use screen::JsScreen;
