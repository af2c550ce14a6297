//! Theme preference
//!
//! Persisted under its own storage key, independent of asset data.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::storage::{self, Storage};
use crate::error::Result;

/// Theme storage key
const THEME_KEY: &str = "theme";

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Load the preference; absent or unparsable data falls back to the
    /// default
    pub fn load(storage: &dyn Storage) -> Self {
        match storage::load_json::<Theme>(storage, THEME_KEY) {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Ignoring unreadable theme preference: {}", e);
                Theme::default()
            }
        }
    }

    /// Persist the preference
    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        storage::save_json(storage, THEME_KEY, self)
    }

    /// The opposite theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
