#![forbid(unsafe_code)]

//! JSON configuration passed by the host page.
//!
//! Every field is optional; missing fields keep their defaults.
//!
//! ```json
//! {
//!   "overlay": { "z_index": 500, "backdrop": { "opacity": 0.7 } },
//!   "text": { "title": "Confirmer le paiement", "confirm_label": "Payer {amount}" }
//! }
//! ```

use std::fmt;

use ridepay_widgets::DialogConfig;

/// Errors from configuration parsing.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`DialogConfig`].
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid dialog configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Parse an optional JSON configuration. Absent or blank input yields the
/// default configuration.
pub fn parse_config(json: Option<&str>) -> Result<DialogConfig, ConfigError> {
    match json.map(str::trim) {
        None | Some("") => Ok(DialogConfig::default()),
        Some(json) => Ok(serde_json::from_str(json)?),
    }
}
