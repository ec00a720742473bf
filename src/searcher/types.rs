//! Rows, host responses and messages for the searcher component.

use super::config::Config;
use crate::error::{Result, SearcherError};
use bubbletea_rs::Msg;
use serde_json::Value;

/// One rendered entry in the results list.
///
/// Each variant carries the text it was built from: the result value for
/// [`Row::SearchResult`], the trimmed query for the other three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A match returned by the host.
    SearchResult(String),
    /// Offer to add the typed value as a new entry.
    CustomAdd(String),
    /// Notice that nothing matched.
    NoResults(String),
    /// Notice that the host truncated the results.
    TooManyResults(String),
}

impl Row {
    /// Class name of the row kind, as used by stylesheets of the list.
    pub fn class_name(&self) -> &'static str {
        match self {
            Row::SearchResult(_) => "search-result",
            Row::CustomAdd(_) => "custom-add",
            Row::NoResults(_) => "no-search-results",
            Row::TooManyResults(_) => "too-many-search-results",
        }
    }

    /// Text the row was built from.
    pub fn value(&self) -> &str {
        match self {
            Row::SearchResult(v) | Row::CustomAdd(v) | Row::NoResults(v) | Row::TooManyResults(v) => {
                v
            }
        }
    }

    /// Whether clicking or pressing enter on the row selects it.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Row::SearchResult(_) | Row::CustomAdd(_))
    }

    /// Display text for the row under the given configuration.
    ///
    /// ```rust
    /// use searcher_widgets::searcher::{Config, Row};
    ///
    /// let config = Config::default();
    /// assert_eq!(Row::SearchResult("Two".into()).label(&config), "Two");
    /// assert_eq!(Row::NoResults("zzz".into()).label(&config), "No Matches For: zzz");
    /// ```
    pub fn label(&self, config: &Config) -> String {
        match self {
            Row::SearchResult(v) => v.clone(),
            Row::CustomAdd(q) => format!("{}{}", config.custom_add_label, q),
            Row::NoResults(q) => format!("{}{}", config.no_results_label, q),
            Row::TooManyResults(q) => format!("{}{}", config.too_many_results_label, q),
        }
    }
}

/// What a host returns for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// Matching values in display order.
    pub results: Vec<String>,
    /// Set when the host left matches out.
    pub too_many_results: bool,
}

impl SearchResponse {
    /// Creates a complete response.
    pub fn new(results: Vec<String>) -> Self {
        Self {
            results,
            too_many_results: false,
        }
    }

    /// Marks the response as truncated.
    pub fn with_too_many_results(mut self, too_many: bool) -> Self {
        self.too_many_results = too_many;
        self
    }

    /// Decodes a loosely-typed response such as one produced by a script
    /// bridge.
    ///
    /// Both `results` and `tooManyResults` (or `too_many_results`) are
    /// required. A missing field is a broken integration, so it is reported
    /// rather than treated as an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`SearcherError::MissingResponseField`] when a field is absent
    /// and [`SearcherError::InvalidResponseField`] when it has the wrong type.
    ///
    /// ```rust
    /// use searcher_widgets::searcher::SearchResponse;
    /// use serde_json::json;
    ///
    /// let ok = SearchResponse::from_json(&json!({"results": ["Two"], "tooManyResults": false}));
    /// assert_eq!(ok.unwrap().results, vec!["Two".to_string()]);
    ///
    /// let err = SearchResponse::from_json(&json!({"results": []}));
    /// assert!(err.is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let results = value
            .get("results")
            .ok_or(SearcherError::MissingResponseField("results"))?;
        let results = results
            .as_array()
            .ok_or(SearcherError::InvalidResponseField {
                field: "results",
                expected: "an array of strings",
            })?
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or(SearcherError::InvalidResponseField {
                        field: "results",
                        expected: "an array of strings",
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let too_many = value
            .get("tooManyResults")
            .or_else(|| value.get("too_many_results"))
            .ok_or(SearcherError::MissingResponseField("tooManyResults"))?
            .as_bool()
            .ok_or(SearcherError::InvalidResponseField {
                field: "tooManyResults",
                expected: "a boolean",
            })?;

        Ok(Self {
            results,
            too_many_results: too_many,
        })
    }
}

/// Sent when the close transition of a searcher has finished.
#[derive(Debug, Clone)]
pub struct CloseTimeoutMsg {
    /// Searcher the timer belongs to.
    pub id: usize,
    pub(super) tag: usize,
}

/// Sent when the blur grace period of a searcher has elapsed.
#[derive(Debug, Clone)]
pub struct BlurTimeoutMsg {
    /// Searcher the timer belongs to.
    pub id: usize,
    pub(super) tag: usize,
}

/// The pointer moved over a row.
#[derive(Debug, Clone)]
pub struct RowHoverMsg {
    /// Target searcher.
    pub id: usize,
    /// Row index, see [`super::Model::row_at_line`].
    pub index: usize,
}

/// A row was clicked.
#[derive(Debug, Clone)]
pub struct RowClickMsg {
    /// Target searcher.
    pub id: usize,
    /// Row index, see [`super::Model::row_at_line`].
    pub index: usize,
}

/// The search input itself was clicked.
#[derive(Debug, Clone)]
pub struct InputClickMsg {
    /// Target searcher.
    pub id: usize,
}

impl From<RowHoverMsg> for Msg {
    fn from(msg: RowHoverMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<RowClickMsg> for Msg {
    fn from(msg: RowClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<InputClickMsg> for Msg {
    fn from(msg: InputClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}
