//! The host side of a searcher: where results come from and where
//! selections go.

use super::types::SearchResponse;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Capabilities a searcher needs from the widget that owns it.
///
/// Only [`SearchHost::does_not_contain_value`] has a default; it allows
/// every custom value.
pub trait SearchHost: Send {
    /// Returns the results for `text`, already lower-cased by the searcher.
    fn search(&mut self, text: &str) -> SearchResponse;

    /// Called with the chosen value: a result or a freshly typed custom value.
    fn select_search_result(&mut self, value: &str);

    /// Called when backspace is pressed on an input that was already empty,
    /// i.e. the user is deleting past the search box into earlier choices.
    fn deleted_beyond_search_input(&mut self);

    /// Returns `false` to hide the custom-add row for `value`, usually
    /// because the host already holds that value.
    fn does_not_contain_value(&self, _value: &str) -> bool {
        true
    }
}

/// In-memory host over a fixed option list.
///
/// Matches options fuzzily, hides options that were already selected and
/// reports `too_many_results` past `max_results`. Backspace on an empty
/// input removes the most recent selection.
///
/// ```rust
/// use searcher_widgets::searcher::{SearchHost, StaticHost};
///
/// let mut host = StaticHost::new(vec!["One".into(), "Two".into(), "Three".into()]);
/// let response = host.search("t");
/// assert_eq!(response.results.len(), 2);
/// assert!(!response.results.contains(&"One".to_string()));
///
/// host.select_search_result("Two");
/// assert_eq!(host.selected(), ["Two".to_string()]);
/// assert!(!host.does_not_contain_value("two"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    options: Vec<String>,
    selected: Vec<String>,
    max_results: usize,
}

impl StaticHost {
    /// Creates a host with no result limit.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: Vec::new(),
            max_results: 0,
        }
    }

    /// Limits the number of results; `0` means unlimited.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// All known options, including custom values added by selection.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected values in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    fn is_selected(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.selected.iter().any(|s| s.to_lowercase() == value)
    }
}

impl SearchHost for StaticHost {
    fn search(&mut self, text: &str) -> SearchResponse {
        let pattern = text.trim();
        let matcher = SkimMatcherV2::default();

        let mut scored: Vec<(i64, &String)> = self
            .options
            .iter()
            .filter(|option| !self.is_selected(option))
            .filter_map(|option| matcher.fuzzy_match(option, pattern).map(|s| (s, option)))
            .collect();
        // stable sort keeps option order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let too_many = self.max_results > 0 && scored.len() > self.max_results;
        if too_many {
            scored.truncate(self.max_results);
        }

        SearchResponse::new(scored.into_iter().map(|(_, o)| o.clone()).collect())
            .with_too_many_results(too_many)
    }

    fn select_search_result(&mut self, value: &str) {
        let lower = value.to_lowercase();
        if !self.options.iter().any(|o| o.to_lowercase() == lower) {
            self.options.push(value.to_string());
        }
        if !self.is_selected(value) {
            self.selected.push(value.to_string());
        }
    }

    fn deleted_beyond_search_input(&mut self) {
        self.selected.pop();
    }

    fn does_not_contain_value(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        !self.options.iter().any(|o| o.to_lowercase() == lower)
    }
}
