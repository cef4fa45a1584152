//! Lock target and tip registrations
//!
//! Configs mirror what a page author passes in: every field optional.
//! Validation turns them into the records the controller keeps.

use crate::assets::default_logo;
use crate::config::ScreenConfig;
use crate::error::ScreenError;
use crate::orientation::LockMode;

/// Request to keep a container in a fixed orientation
#[derive(Clone, Debug)]
pub struct LockConfig<E> {
    /// Orientation to force (required)
    pub mode: Option<LockMode>,
    /// Container to style (required)
    pub element: Option<E>,
    /// Stacking order, `ScreenConfig::lock_z_index` when absent
    pub z_index: Option<i32>,
}

impl<E> Default for LockConfig<E> {
    fn default() -> Self {
        Self {
            mode: None,
            element: None,
            z_index: None,
        }
    }
}

impl<E> LockConfig<E> {
    /// Create a complete lock request
    pub fn new(mode: LockMode, element: E) -> Self {
        Self {
            mode: Some(mode),
            element: Some(element),
            z_index: None,
        }
    }

    /// Set the z-index
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Check required fields and apply defaults
    pub fn validate(self, config: &ScreenConfig) -> Result<LockTarget<E>, ScreenError> {
        let mode = self.mode.ok_or(ScreenError::MissingField("mode"))?;
        let element = self.element.ok_or(ScreenError::MissingField("element"))?;
        Ok(LockTarget {
            mode,
            element,
            z_index: self.z_index.unwrap_or(config.lock_z_index),
        })
    }
}

/// A container under forced-orientation management
#[derive(Clone, Debug)]
pub struct LockTarget<E> {
    pub mode: LockMode,
    pub element: E,
    pub z_index: i32,
}

/// Request to show a rotate prompt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TipConfig {
    /// Orientation the tip is keyed on (required)
    pub mode: Option<LockMode>,
    /// DOM id of the overlay (required, non-empty)
    pub id: Option<String>,
    /// Logo source, the built-in logo for `mode` when absent or empty
    pub logo: Option<String>,
    /// Caption, the configured default for `mode` when absent or empty
    pub text: Option<String>,
    /// Stacking order, `ScreenConfig::tip_z_index` when absent or zero
    pub z_index: Option<i32>,
}

impl TipConfig {
    /// Create a tip request with only the required fields
    pub fn new(mode: LockMode, id: impl Into<String>) -> Self {
        Self {
            mode: Some(mode),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Set the logo source
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Set the caption
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the z-index
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Check required fields and fill in defaults
    pub fn resolve(self, config: &ScreenConfig) -> Result<ResolvedTip, ScreenError> {
        let mode = self.mode.ok_or(ScreenError::MissingField("mode"))?;
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ScreenError::MissingField("id"))?;

        let logo = self
            .logo
            .filter(|logo| !logo.is_empty())
            .unwrap_or_else(|| default_logo(mode).to_string());
        let text = self
            .text
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| config.default_text(mode).to_string());
        let z_index = self
            .z_index
            .filter(|z| *z != 0)
            .unwrap_or(config.tip_z_index);

        Ok(ResolvedTip {
            mode,
            id,
            logo,
            text,
            z_index,
        })
    }
}

/// A tip request with every default applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTip {
    pub mode: LockMode,
    pub id: String,
    pub logo: String,
    pub text: String,
    pub z_index: i32,
}

impl ResolvedTip {
    /// The record the controller keeps for visibility reconciliation
    pub fn registration(&self) -> TipRegistration {
        TipRegistration {
            id: self.id.clone(),
            mode: self.mode,
        }
    }
}

/// An overlay under visibility management
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipRegistration {
    pub id: String,
    pub mode: LockMode,
}
