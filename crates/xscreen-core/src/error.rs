//! Errors for registration and configuration

use thiserror::Error;
use xscreen_hal::HostError;

/// Reasons a registration or configuration was rejected
///
/// Registration calls on [`crate::Screen`] never return these; they are
/// logged through the host and the call is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// A required field was absent or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A mode string was neither "portrait" nor "landscape"
    #[error("invalid mode `{0}`, expected \"portrait\" or \"landscape\"")]
    InvalidMode(String),
    /// Configuration JSON could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The host failed an operation
    #[error(transparent)]
    Host(#[from] HostError),
}
