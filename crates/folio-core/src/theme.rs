//! Dark/light mode state and color tokens.
//!
//! The mode lives in a [`ThemeState`] owned by whoever scopes it (the site
//! provides it through a Dioxus context). Components read the
//! [`Palette`] for the active mode instead of hard-coding colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Visual mode of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    /// Night sky with stars.
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns true for the dark (night) mode.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label for the toggle button (names the mode you switch *to*).
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }

    /// Color tokens for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// The theme flag. Toggled from the navigation bar, read everywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flips between dark and light.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "Theme toggled");
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }
}

/// Color tokens for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Brand purple, used for headings and primary buttons.
    pub primary: &'static str,
    /// Brand green.
    pub secondary: &'static str,
    /// Page background.
    pub background: &'static str,
    /// Card and panel surface.
    pub paper: &'static str,
    /// Translucent card surface over the animated background.
    pub glass: &'static str,
    /// Solid fill painted behind the particles.
    pub sky: &'static str,
    /// Navigation accent (active link, resume button).
    pub accent: &'static str,
    /// Hover variant of the accent.
    pub accent_strong: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// Gradient for the navigation underline and footer bar.
    pub accent_gradient: &'static str,
    /// Animated body gradient.
    pub body_gradient: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    primary: "#7f5af0",
    secondary: "#2cb67d",
    background: "#16161a",
    paper: "#21212b",
    glass: "rgba(33, 33, 43, 0.75)",
    sky: "#181b2a",
    accent: "#7f5af0",
    accent_strong: "#2cb67d",
    text_primary: "#ffffff",
    text_secondary: "rgba(255, 255, 255, 0.7)",
    accent_gradient: "linear-gradient(90deg, #7f5af0, #2cb67d)",
    body_gradient: "linear-gradient(120deg, #232946 0%, #7f5af0 50%, #2cb67d 100%)",
};

pub const LIGHT_PALETTE: Palette = Palette {
    primary: "#7f5af0",
    secondary: "#2cb67d",
    background: "#fafafa",
    paper: "#ffffff",
    glass: "rgba(255, 255, 255, 0.75)",
    sky: "#f7fafc",
    accent: "#1976d2",
    accent_strong: "#1565c0",
    text_primary: "#232946",
    text_secondary: "rgba(0, 0, 0, 0.6)",
    accent_gradient: "linear-gradient(90deg, #FFD600, #FF9800)",
    body_gradient: "linear-gradient(120deg, #fafafa 0%, #7f5af0 50%, #2cb67d 100%)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_original() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let mut state = ThemeState::new(mode);
            state.toggle();
            assert_ne!(state.mode(), mode);
            state.toggle();
            assert_eq!(state.mode(), mode);
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeState::default().is_dark());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ParseThemeError("sepia".to_string()))
        );
    }

    #[test]
    fn test_palette_follows_mode() {
        let mut state = ThemeState::new(ThemeMode::Dark);
        assert_eq!(state.palette().sky, "#181b2a");
        state.toggle();
        assert_eq!(state.palette().sky, "#f7fafc");
        assert_eq!(state.palette().background, "#fafafa");
    }

    #[test]
    fn test_display_matches_css_value() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::Dark.to_string(), ThemeMode::Dark.css_value());
    }
}
