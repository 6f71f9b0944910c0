//! # Theme
//!
//! Light/dark color mode. The active mode travels in the `theme` query
//! parameter, so nothing is stored between requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Icon on the toggle button: the mode you would switch to
    pub fn toggle_icon(&self) -> Icon {
        match self {
            ColorMode::Light => Icon::Moon,
            ColorMode::Dark => Icon::Sun,
        }
    }

    /// Parse an optional request value, falling back on absence or garbage
    pub fn resolve(requested: Option<&str>, fallback: ColorMode) -> ColorMode {
        requested
            .and_then(|value| value.parse().ok())
            .unwrap_or(fallback)
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(Error::UnknownColorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
