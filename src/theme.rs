use std::fmt;

use crate::config::ThemeConfig;
use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Interpret a stored value. Only the exact string `"dark"` selects dark;
    /// anything else that was stored means light.
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    Stored,
    System,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: PreferenceSource,
}

/// Resolve the initial theme: stored choice, then system preference, then light.
///
/// The system preference is only queried when nothing is stored.
pub fn resolve(stored: Option<&str>, system_prefers_dark: impl FnOnce() -> bool) -> Resolution {
    match stored {
        Some(value) => Resolution {
            theme: Theme::from_stored(value),
            source: PreferenceSource::Stored,
        },
        None if system_prefers_dark() => Resolution {
            theme: Theme::Dark,
            source: PreferenceSource::System,
        },
        None => Resolution {
            theme: Theme::Light,
            source: PreferenceSource::Default,
        },
    }
}

/// A checkbox-like control whose checked position means "light mode".
pub trait ToggleControl {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
}

/// Everything the controller touches outside itself: the document, the
/// preference store and the system color-scheme query.
pub trait ThemeHost {
    type Toggle: ToggleControl;

    fn find_toggle(&self, id: &str) -> Option<Self::Toggle>;
    fn stored_preference(&self, key: &str) -> Option<String>;
    fn store_preference(&self, key: &str, value: &str);
    fn prefers_dark(&self, query: &str) -> bool;
    fn set_root_attribute(&self, name: &str, value: &str);
    fn remove_root_attribute(&self, name: &str);
}

/// Owns the current theme flag and keeps the document and the toggle in step with it.
pub struct ThemeController<H: ThemeHost> {
    host: H,
    toggle: H::Toggle,
    config: ThemeConfig,
    dark: bool,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Locate the toggle, resolve the initial theme and apply it without persisting.
    ///
    /// Fails only when the toggle control is missing from the page.
    pub fn initialize(host: H, config: ThemeConfig) -> Result<Self, ThemeError> {
        let toggle = host
            .find_toggle(&config.toggle_id)
            .ok_or_else(|| ThemeError::ToggleNotFound {
                id: config.toggle_id.clone(),
            })?;

        let stored = host.stored_preference(&config.storage_key);
        let resolution = resolve(stored.as_deref(), || host.prefers_dark(&config.dark_query));
        log::debug!(
            "Resolved initial theme {} from {:?}",
            resolution.theme,
            resolution.source
        );

        let mut controller = Self {
            host,
            toggle,
            config,
            dark: resolution.theme.is_dark(),
        };
        controller.apply(resolution.theme, false);
        Ok(controller)
    }

    /// Apply `theme` to the toggle and the document root, optionally persisting it.
    pub fn apply(&mut self, theme: Theme, persist: bool) {
        self.dark = theme.is_dark();
        self.toggle.set_checked(!self.dark);

        if self.dark {
            self.host
                .set_root_attribute(&self.config.attribute, Theme::Dark.as_str());
        } else {
            self.host.remove_root_attribute(&self.config.attribute);
        }

        if persist {
            self.host
                .store_preference(&self.config.storage_key, theme.as_str());
            log::info!("Theme set to {} and saved", theme);
        }
    }

    /// Handle a user change of the toggle: checked means light.
    pub fn toggle_changed(&mut self) {
        let theme = Theme::from_dark(!self.toggle.is_checked());
        self.apply(theme, true);
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark)
    }

    pub fn toggle(&self) -> &H::Toggle {
        &self.toggle
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}
