//! Light/dark presentation flag

use serde::{Deserialize, Serialize};

/// Presentation theme. Has no effect on computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (no class on the root scope)
    #[default]
    Dark,
    /// Light theme (`light` class on the root scope)
    Light,
}

impl Theme {
    /// CSS class toggled on the root scope for the light theme
    pub const LIGHT_CLASS: &'static str = "light";

    /// Maps the checkbox state onto a theme
    #[must_use]
    pub const fn from_light(is_light: bool) -> Self {
        if is_light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Returns true for the light theme
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}
