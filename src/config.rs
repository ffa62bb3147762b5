use crate::error::Result;
use crate::recent_status_ty::MAX_RECENT_CUSTOM_STATUSES;
use crate::status_ty::{CUSTOM_STATUS_TEXT_MAX_RUNES, DEFAULT_CUSTOM_STATUS_EMOJI};
use serde::Deserialize;

/// Limits and defaults applied by `StatusParser` and the recent status ledger.
///
/// Every field falls back to its default when omitted, so an empty TOML
/// document yields `Config::default()`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of `char`s kept in a status text.
    pub text_max_runes: usize,
    /// Maximum number of entries kept in the recent status ledger.
    pub max_recent: usize,
    /// Emoji name used when no emoji indicator is recognized.
    ///
    /// An empty name falls back to `speech_balloon`.
    pub default_emoji: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text_max_runes: CUSTOM_STATUS_TEXT_MAX_RUNES,
            max_recent: MAX_RECENT_CUSTOM_STATUSES,
            default_emoji: DEFAULT_CUSTOM_STATUS_EMOJI.to_owned(),
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
