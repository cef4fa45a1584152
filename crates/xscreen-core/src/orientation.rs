//! Orientation detection
//!
//! Orientation is inferred by comparing the rendered client width against
//! the device screen's shorter and longer side. There is no sensor access.

use std::fmt;

use serde::{Deserialize, Serialize};
use xscreen_hal::Size;

/// Page-relative layout direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Client width spans the screen's longer side
    Landscape,
    /// Client width spans the screen's shorter side
    Portrait,
    /// Client width matches neither side (e.g. a resized desktop window)
    #[default]
    Unknown,
}

impl Orientation {
    /// Get the string ID for this orientation
    pub fn id(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Orientation a container is locked to, or a tip is keyed on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockMode {
    Portrait,
    Landscape,
}

impl LockMode {
    /// Parse from string ID (e.g., "portrait", "landscape")
    ///
    /// IDs are case-sensitive.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "portrait" => Some(LockMode::Portrait),
            "landscape" => Some(LockMode::Landscape),
            _ => None,
        }
    }

    /// Get the string ID for this mode
    pub fn id(&self) -> &'static str {
        match self {
            LockMode::Portrait => "portrait",
            LockMode::Landscape => "landscape",
        }
    }

    /// The orientation this mode stands for
    pub fn orientation(&self) -> Orientation {
        match self {
            LockMode::Portrait => Orientation::Portrait,
            LockMode::Landscape => Orientation::Landscape,
        }
    }

    /// Whether the page is currently in this mode's orientation
    ///
    /// `Unknown` never matches.
    #[inline]
    pub fn matches(&self, orientation: Orientation) -> bool {
        self.orientation() == orientation
    }
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Infer orientation from the device screen and the rendered client width
///
/// Landscape is checked first, so a square screen always reads landscape
/// when the client width fills it.
pub fn detect_orientation(screen: Size, client_width: u32) -> Orientation {
    if client_width == screen.max_side() {
        Orientation::Landscape
    } else if client_width == screen.min_side() {
        Orientation::Portrait
    } else {
        Orientation::Unknown
    }
}
