//! Forced screen orientation for mobile web pages
//!
//! Keeps page containers displayed in a fixed orientation regardless of how
//! the device is held, overlays a rotate prompt when the orientation is not
//! the one the page expects, and notifies subscribers when it changes.
//!
//! ## Module Structure
//!
//! - `orientation` - Orientation and lock mode types, detection
//! - `style` - Rotation transforms for locked containers
//! - `overlay` - Rotate-prompt stylesheet and markup
//! - `registration` - Lock and tip configs, validation and defaults
//! - `assets` - Built-in logos
//! - `config` - Controller-wide defaults
//! - `screen` - The `Screen` controller
//!
//! The controller is generic over [`xscreen_hal::Host`], so the same logic
//! runs in the browser (`xscreen-web`) and against `MockHost` in tests.

pub mod assets;
pub mod config;
pub mod error;
pub mod orientation;
pub mod overlay;
pub mod registration;
mod screen;
pub mod style;

pub use config::{ScreenConfig, DEFAULT_LOCK_Z_INDEX, DEFAULT_TIP_Z_INDEX};
pub use error::ScreenError;
pub use orientation::{detect_orientation, LockMode, Orientation};
pub use registration::{LockConfig, LockTarget, ResolvedTip, TipConfig, TipRegistration};
pub use screen::Screen;
pub use style::{lock_style_for, LockStyle, StyleMode};

pub use xscreen_hal::{Host, HostError, Size};
