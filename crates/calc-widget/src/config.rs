//! Widget configuration

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Text shown in the history list while it has no entries
pub const DEFAULT_PLACEHOLDER: &str = "No history yet";

/// Widget construction settings
///
/// Hosts can build this in code or load it from JSON:
///
/// ```rust
/// use calc_widget::config::WidgetConfig;
///
/// let config = WidgetConfig::from_json(r#"{"initial_theme":"light"}"#).unwrap();
/// assert!(config.initial_theme.is_light());
/// assert_eq!(config.placeholder, "No history yet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// History placeholder text
    pub placeholder: String,
    /// Theme applied at construction
    pub initial_theme: Theme,
    /// Maximum number of history entries; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            initial_theme: Theme::Dark,
            history_limit: None,
        }
    }
}

impl WidgetConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the placeholder text
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the initial theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.initial_theme = theme;
        self
    }

    /// Bounds the history
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
