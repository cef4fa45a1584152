//! Forced-orientation styling
//!
//! A locked container is pinned to the top-left of the viewport. When the
//! page is in the wrong orientation its width and height are swapped and it
//! is rotated by a quarter turn around a point on its diagonal, so the
//! content appears upright for a user holding the device the other way.

use xscreen_hal::Size;

use crate::orientation::{LockMode, Orientation};

/// Which transform to apply to a locked container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleMode {
    /// No rotation, natural client size
    #[default]
    Normal,
    /// Rotate -90° to present portrait content in a landscape viewport
    Portrait,
    /// Rotate 90° to present landscape content in a portrait viewport
    Landscape,
}

impl From<LockMode> for StyleMode {
    fn from(mode: LockMode) -> Self {
        match mode {
            LockMode::Portrait => StyleMode::Portrait,
            LockMode::Landscape => StyleMode::Landscape,
        }
    }
}

/// Computed inline style for a locked container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LockStyle {
    pub z_index: i32,
    pub width: u32,
    pub height: u32,
    pub rotate_deg: i32,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl LockStyle {
    /// Compute the style for `mode` given the current client size
    pub fn compute(mode: StyleMode, client: Size, z_index: i32) -> Self {
        match mode {
            StyleMode::Portrait => {
                let origin = f64::from(client.height) / 2.0;
                Self {
                    z_index,
                    width: client.height,
                    height: client.width,
                    rotate_deg: -90,
                    origin_x: origin,
                    origin_y: origin,
                }
            }
            StyleMode::Landscape => {
                let origin = f64::from(client.width) / 2.0;
                Self {
                    z_index,
                    width: client.height,
                    height: client.width,
                    rotate_deg: 90,
                    origin_x: origin,
                    origin_y: origin,
                }
            }
            StyleMode::Normal => Self {
                z_index,
                width: client.width,
                height: client.height,
                rotate_deg: 0,
                origin_x: 0.0,
                origin_y: 0.0,
            },
        }
    }

    /// Whether this style rotates the container
    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.rotate_deg != 0
    }

    /// Render as inline style text
    pub fn to_css(&self) -> String {
        let rotate = if self.rotate_deg == 0 {
            "0".to_string()
        } else {
            format!("{}deg", self.rotate_deg)
        };
        format!(
            "position: fixed;\n\
             top: 0;\n\
             left: 0;\n\
             z-index: {z};\n\
             width: {w}px;\n\
             height: {h}px;\n\
             -webkit-transform: rotate({r});\n\
             transform: rotate({r});\n\
             -webkit-transform-origin: {ox}px {oy}px;\n\
             transform-origin: {ox}px {oy}px;\n",
            z = self.z_index,
            w = self.width,
            h = self.height,
            r = rotate,
            ox = self.origin_x,
            oy = self.origin_y,
        )
    }
}

/// Style for a container locked to `mode` while the page reads `orientation`
///
/// Already in the locked orientation: the normal style, whatever `mode` is.
pub fn lock_style_for(
    mode: LockMode,
    orientation: Orientation,
    client: Size,
    z_index: i32,
) -> LockStyle {
    let style_mode = if mode.matches(orientation) {
        StyleMode::Normal
    } else {
        StyleMode::from(mode)
    };
    LockStyle::compute(style_mode, client, z_index)
}
