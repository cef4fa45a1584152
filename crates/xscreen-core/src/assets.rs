//! Built-in rotate-prompt logos
//!
//! The PNG bytes are compiled into the crate. Their data URIs are encoded on
//! first use and shared for the rest of the process.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::orientation::LockMode;

/// Phone icon shown by portrait tips
pub const PORTRAIT_LOGO_PNG: &[u8] = include_bytes!("../assets/portrait.png");

/// Phone icon shown by landscape tips
pub const LANDSCAPE_LOGO_PNG: &[u8] = include_bytes!("../assets/landscape.png");

static PORTRAIT_LOGO_URI: OnceLock<String> = OnceLock::new();
static LANDSCAPE_LOGO_URI: OnceLock<String> = OnceLock::new();

fn png_data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}

/// Data URI of the built-in logo for `mode`
pub fn default_logo(mode: LockMode) -> &'static str {
    match mode {
        LockMode::Portrait => PORTRAIT_LOGO_URI.get_or_init(|| png_data_uri(PORTRAIT_LOGO_PNG)),
        LockMode::Landscape => {
            LANDSCAPE_LOGO_URI.get_or_init(|| png_data_uri(LANDSCAPE_LOGO_PNG))
        }
    }
}
