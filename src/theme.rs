//! Visual theme preference persistence.
//!
//! Pure presentation data, carried here only because it shares the
//! durable key/value layout with the score tally.

use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed key the theme preference is persisted under.
pub const THEME_KEY: &str = "ttt_theme";

/// Light/dark mode preference, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light mode.
    Light,
    /// Dark mode (the default).
    #[default]
    Dark,
}

impl ThemePreference {
    /// Loads the saved preference.
    ///
    /// Only a stored `"light"` yields [`Light`](Self::Light); absence,
    /// any other value, and read failures all yield dark.
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.read(THEME_KEY) {
            Ok(Some(value)) if value == "light" => Self::Light,
            Ok(_) => Self::Dark,
            Err(e) => {
                warn!(error = %e, "Theme read failed, using dark");
                Self::Dark
            }
        }
    }

    /// Persists the preference. Write failures are logged and dropped.
    pub fn save(self, storage: &mut dyn Storage) {
        if let Err(e) = storage.write(THEME_KEY, self.as_str()) {
            warn!(error = %e, "Theme write failed");
        }
    }

    /// Storage representation, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode, for a toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
