//! Persisted theme preference.

use genora_core::Theme;
use tracing::{debug, warn};

use crate::keys::THEME_KEY;
use crate::kv::SharedStore;
use crate::Result;

/// The current theme, passed explicitly to whatever renders output.
///
/// Initialized once from the persisted preference, falling back to the
/// system default; every change is persisted.
pub struct ThemeSettings {
    store: SharedStore,
    theme: Theme,
}

impl ThemeSettings {
    /// Load the persisted theme, or use `system_default` when none is saved
    /// or the saved value is unrecognized.
    pub fn load(store: SharedStore, system_default: Theme) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                warn!("Ignoring saved theme: {}", e);
                system_default
            }),
            None => system_default,
        };
        debug!("Theme: {}", theme);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change and persist the theme.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}
