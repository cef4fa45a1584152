//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::orientation::LockMode;

/// Default z-index of a locked container
pub const DEFAULT_LOCK_Z_INDEX: i32 = 301;

/// Default z-index of a tip overlay
pub const DEFAULT_TIP_Z_INDEX: i32 = 310;

/// Default caption of a portrait tip
pub const DEFAULT_PORTRAIT_TEXT: &str = "为了更好的体验，请保持竖屏浏览";

/// Default caption of a landscape tip
pub const DEFAULT_LANDSCAPE_TEXT: &str = "为了更好的体验，请保持横屏浏览";

/// Defaults applied to registrations that leave fields out
///
/// Deserializes from camelCase JSON; every field is optional:
///
/// ```ignore
/// let config = ScreenConfig::from_json(r#"{ "tipZIndex": 900 }"#)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenConfig {
    /// z-index for `lock` calls without one
    pub lock_z_index: i32,
    /// z-index for `inform` calls without one
    pub tip_z_index: i32,
    /// Caption for portrait tips without text
    pub portrait_text: String,
    /// Caption for landscape tips without text
    pub landscape_text: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            lock_z_index: DEFAULT_LOCK_Z_INDEX,
            tip_z_index: DEFAULT_TIP_Z_INDEX,
            portrait_text: DEFAULT_PORTRAIT_TEXT.to_string(),
            landscape_text: DEFAULT_LANDSCAPE_TEXT.to_string(),
        }
    }
}

impl ScreenConfig {
    /// Parse a configuration from JSON, filling absent fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ScreenError> {
        serde_json::from_str(json).map_err(|e| ScreenError::Config(e.to_string()))
    }

    /// Default tip caption for `mode`
    pub fn default_text(&self, mode: LockMode) -> &str {
        match mode {
            LockMode::Portrait => &self.portrait_text,
            LockMode::Landscape => &self.landscape_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ScreenConfig::default();
        assert_eq!(config.lock_z_index, 301);
        assert_eq!(config.tip_z_index, 310);
        assert_eq!(config.default_text(LockMode::Portrait), DEFAULT_PORTRAIT_TEXT);
        assert_eq!(config.default_text(LockMode::Landscape), DEFAULT_LANDSCAPE_TEXT);
    }

    #[test]
    fn test_config_from_empty_json() {
        let config = ScreenConfig::from_json("{}").unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config =
            ScreenConfig::from_json(r#"{ "tipZIndex": 900, "landscapeText": "Rotate me" }"#)
                .unwrap();
        assert_eq!(config.tip_z_index, 900);
        assert_eq!(config.lock_z_index, DEFAULT_LOCK_Z_INDEX);
        assert_eq!(config.default_text(LockMode::Landscape), "Rotate me");
        assert_eq!(config.default_text(LockMode::Portrait), DEFAULT_PORTRAIT_TEXT);
    }

    #[test]
    fn test_config_from_invalid_json() {
        let err = ScreenConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ScreenError::Config(_)));

        let err = ScreenConfig::from_json(r#"{ "lockZIndex": "high" }"#).unwrap_err();
        assert!(matches!(err, ScreenError::Config(_)));
    }
}
