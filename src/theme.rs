// theme.rs - Theme Mode Preference
//
// Tri-state display preference. `System` follows the desktop color scheme;
// the other two force a palette. Resolution to light/dark happens at render
// time so a desktop scheme change only needs a restart, not a migration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User-selected display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Stable identifier used as the persisted value.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Human-facing label for selection rows.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "Follow system",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ThemeMode::Light => "Bright backgrounds, dark text",
            ThemeMode::Dark => "Dim backgrounds, easier on the eyes",
            ThemeMode::System => "Match the device appearance setting",
        }
    }

    /// Resolve the preference to a concrete dark flag.
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

/// Ask the desktop environment whether it prefers dark colors.
pub fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        dark_light::Mode::Dark => true,
        dark_light::Mode::Light | dark_light::Mode::Default => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!("solarized".parse::<ThemeMode>().is_err());
        assert!("Dark".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn resolution_follows_system_only_for_system_mode() {
        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
    }
}
