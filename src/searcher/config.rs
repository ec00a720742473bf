//! Searcher configuration and bulk options.

use crate::error::Result;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Delay between closing the results and hiding the container.
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_millis(200);

/// Grace period after the input loses focus before the results close.
///
/// A click on a row briefly takes focus from the input; the grace period
/// lets that click be handled before the list is torn down.
pub const BLUR_GRACE: Duration = Duration::from_millis(300);

/// Number of rows shown before the list scrolls.
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 10;

/// Default prefix of the custom-add row.
pub const DEFAULT_CUSTOM_ADD_LABEL: &str = "Add Custom: ";

/// Default prefix of the no-results row.
pub const DEFAULT_NO_RESULTS_LABEL: &str = "No Matches For: ";

/// Default prefix of the too-many-results row.
pub const DEFAULT_TOO_MANY_RESULTS_LABEL: &str = "Too Many Matches For: ";

/// Veto hook run before a custom value is committed. Returning `false`
/// keeps the results open and nothing is selected.
pub type CustomAddFunc = Box<dyn Fn(&str) -> bool + Send>;

/// Typed searcher configuration.
pub struct Config {
    /// Delay before the closed container is hidden.
    pub close_timeout: Duration,
    /// Whether a custom-add row may appear.
    pub custom_add_enabled: bool,
    /// Optional veto for custom values. `None` accepts every value.
    pub custom_add_callback: Option<CustomAddFunc>,
    /// Prefix of the custom-add row.
    pub custom_add_label: String,
    /// Prefix of the no-results row.
    pub no_results_label: String,
    /// Prefix of the too-many-results row.
    pub too_many_results_label: String,
    /// Rows shown before the list scrolls. Never zero.
    pub max_visible_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
            custom_add_enabled: true,
            custom_add_callback: None,
            custom_add_label: DEFAULT_CUSTOM_ADD_LABEL.to_string(),
            no_results_label: DEFAULT_NO_RESULTS_LABEL.to_string(),
            too_many_results_label: DEFAULT_TOO_MANY_RESULTS_LABEL.to_string(),
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("close_timeout", &self.close_timeout)
            .field("custom_add_enabled", &self.custom_add_enabled)
            .field("custom_add_callback", &self.custom_add_callback.is_some())
            .field("custom_add_label", &self.custom_add_label)
            .field("no_results_label", &self.no_results_label)
            .field("too_many_results_label", &self.too_many_results_label)
            .field("max_visible_rows", &self.max_visible_rows)
            .finish()
    }
}

impl Config {
    /// Runs the custom-add veto for `value`.
    pub fn accepts_custom_value(&self, value: &str) -> bool {
        self.custom_add_callback
            .as_ref()
            .map_or(true, |callback| callback(value))
    }

    /// Merges every field set in `options` into this configuration.
    pub fn apply(&mut self, options: &SearcherOptions) {
        if let Some(ms) = options.close_timeout_ms {
            self.close_timeout = Duration::from_millis(ms);
        }
        if let Some(enabled) = options.custom_add_enabled {
            self.custom_add_enabled = enabled;
        }
        if let Some(label) = &options.custom_add_label {
            self.custom_add_label = label.clone();
        }
        if let Some(label) = &options.no_search_results_label {
            self.no_results_label = label.clone();
        }
        if let Some(label) = &options.too_many_search_results_label {
            self.too_many_results_label = label.clone();
        }
        if let Some(rows) = options.max_visible_rows {
            self.max_visible_rows = rows.max(1);
        }
    }
}

/// Partial configuration update, applied with
/// [`super::Model::with_options`].
///
/// Unset fields leave the current value alone. Options can be read from
/// JSON with camelCase keys:
///
/// ```rust
/// use searcher_widgets::searcher::SearcherOptions;
///
/// let opts = SearcherOptions::from_json(r#"{"closeTimeout": 50, "customAddLabel": "Add New Value: "}"#).unwrap();
/// assert_eq!(opts.close_timeout_ms, Some(50));
/// assert_eq!(opts.custom_add_label.as_deref(), Some("Add New Value: "));
/// assert!(SearcherOptions::from_json(r#"{"colour": "red"}"#).is_err());
/// ```
///
/// The custom-add callback cannot be expressed as data; set it with
/// [`super::Model::with_custom_add_callback`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SearcherOptions {
    /// Close transition delay in milliseconds.
    #[serde(alias = "closeTimeout")]
    pub close_timeout_ms: Option<u64>,
    /// Whether a custom-add row may appear.
    pub custom_add_enabled: Option<bool>,
    /// Prefix of the custom-add row.
    pub custom_add_label: Option<String>,
    /// Prefix of the no-results row.
    pub no_search_results_label: Option<String>,
    /// Prefix of the too-many-results row.
    pub too_many_search_results_label: Option<String>,
    /// Rows shown before the list scrolls.
    pub max_visible_rows: Option<usize>,
}

impl SearcherOptions {
    /// Parses options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SearcherError::InvalidOptions`] for malformed JSON,
    /// unknown keys or mistyped values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.close_timeout, Duration::from_millis(200));
        assert!(config.custom_add_enabled);
        assert!(config.accepts_custom_value("anything"));
        assert_eq!(config.custom_add_label, "Add Custom: ");
        assert_eq!(config.no_results_label, "No Matches For: ");
        assert_eq!(config.too_many_results_label, "Too Many Matches For: ");
        assert_eq!(config.max_visible_rows, 10);
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut config = Config::default();
        config.apply(&SearcherOptions {
            custom_add_enabled: Some(false),
            max_visible_rows: Some(0),
            ..SearcherOptions::default()
        });
        assert!(!config.custom_add_enabled);
        assert_eq!(config.max_visible_rows, 1);
        assert_eq!(config.custom_add_label, DEFAULT_CUSTOM_ADD_LABEL);
        assert_eq!(config.close_timeout, DEFAULT_CLOSE_TIMEOUT);
    }

    #[test]
    fn test_callback_veto() {
        let config = Config {
            custom_add_callback: Some(Box::new(|v: &str| v.len() > 2)),
            ..Config::default()
        };
        assert!(!config.accepts_custom_value("ab"));
        assert!(config.accepts_custom_value("abc"));
    }

    #[test]
    fn test_options_from_json() {
        let opts = SearcherOptions::from_json(
            r#"{"closeTimeoutMs": 10, "noSearchResultsLabel": "Nothing: ", "maxVisibleRows": 4}"#,
        )
        .unwrap();
        assert_eq!(opts.close_timeout_ms, Some(10));
        assert_eq!(opts.no_search_results_label.as_deref(), Some("Nothing: "));
        assert_eq!(opts.max_visible_rows, Some(4));
        assert_eq!(opts.custom_add_enabled, None);
    }

    #[test]
    fn test_options_from_json_rejects_bad_types() {
        let err = SearcherOptions::from_json(r#"{"customAddEnabled": "yes"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid searcher options"));
    }
}
