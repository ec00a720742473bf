//! Search, highlight, selection and close operations.

use super::host::SearchHost;
use super::model::Model;
use super::types::{CloseTimeoutMsg, Row};
use bubbletea_rs::{tick, Cmd, Msg};
use tracing::{debug, trace};

impl<H: SearchHost> Model<H> {
    /// Runs a search and rebuilds the results list.
    ///
    /// With `Some(text)` the text is first written into the input (when it
    /// differs). The host receives the lower-cased input value. Rows are
    /// rebuilt from scratch:
    ///
    /// 1. one [`Row::SearchResult`] per host result,
    /// 2. a [`Row::CustomAdd`] when enabled, no result equals the query
    ///    (trimmed, case-insensitive) and the host does not veto it,
    /// 3. a [`Row::NoResults`] when nothing above was produced,
    /// 4. a [`Row::TooManyResults`] when the host truncated its results.
    ///
    /// A whitespace-only query produces no rows and the host is not asked.
    /// The exact match, or else the custom-add row, is highlighted.
    ///
    /// Returns the close timer when the search ended with no rows.
    pub fn search(&mut self, search_text: Option<&str>) -> Option<Cmd> {
        if let Some(text) = search_text {
            if text != self.input.value() {
                self.input.set_value(text);
            }
        }

        // A pending close must not hide the list this search reopens.
        self.close_tag = self.close_tag.wrapping_add(1);

        let raw = self.input.value();
        let query = raw.to_lowercase();
        let trimmed_query = query.trim();
        let typed = raw.trim();

        self.input.fit_to_content();
        self.rows.clear();
        self.highlighted = None;
        self.scroll_offset = 0;

        let mut auto_highlight = None;

        if !trimmed_query.is_empty() {
            let response = self.host.search(&query);

            for result in response.results {
                if auto_highlight.is_none() && result.trim().to_lowercase() == trimmed_query {
                    auto_highlight = Some(self.rows.len());
                }
                self.rows.push(Row::SearchResult(result));
            }

            if self.config.custom_add_enabled
                && auto_highlight.is_none()
                && self.host.does_not_contain_value(typed)
            {
                auto_highlight = Some(self.rows.len());
                self.rows.push(Row::CustomAdd(typed.to_string()));
            }

            if self.rows.is_empty() {
                self.rows.push(Row::NoResults(typed.to_string()));
            }

            if response.too_many_results {
                self.rows.push(Row::TooManyResults(typed.to_string()));
            }
        }

        debug!(
            searcher = self.id,
            query = %query,
            rows = self.rows.len(),
            "searched"
        );

        if self.rows.is_empty() {
            return Some(self.close_search_results());
        }

        self.open = true;
        self.shown = true;
        self.window_height = self.rows.len().min(self.config.max_visible_rows);

        if let Some(index) = auto_highlight {
            self.highlight_search_result(index);
        }
        None
    }

    /// Highlights the row at `index` and scrolls it into the window.
    ///
    /// Out-of-range indices are ignored.
    pub fn highlight_search_result(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.highlighted = Some(index);

        let height = self.window_height.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + height {
            self.scroll_offset = index + 1 - height;
        }
    }

    /// Moves the highlight down one row, wrapping to the first.
    ///
    /// Starts at the first row when nothing is highlighted.
    pub fn highlight_next_search_result(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.highlighted {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.highlight_search_result(next);
    }

    /// Moves the highlight up one row, wrapping to the last.
    ///
    /// Starts at the last row when nothing is highlighted.
    pub fn highlight_previous_search_result(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = match self.highlighted {
            Some(i) if i > 0 => i - 1,
            _ => self.rows.len() - 1,
        };
        self.highlight_search_result(previous);
    }

    /// Commits the highlighted row to the host and closes the results.
    ///
    /// For the custom-add row the trimmed input value is committed, after
    /// the custom-add callback agreed; a veto leaves everything open.
    /// Notice rows cannot be selected. Returns the close timer when a value
    /// was committed.
    pub fn select_highlighted_search_result(&mut self) -> Option<Cmd> {
        let row = self.get_highlighted_search_result()?;

        let value = match row {
            Row::SearchResult(value) => value.clone(),
            Row::CustomAdd(_) => {
                let candidate = self.input.value().trim().to_string();
                if !self.config.accepts_custom_value(&candidate) {
                    debug!(searcher = self.id, value = %candidate, "custom value vetoed");
                    return None;
                }
                candidate
            }
            Row::NoResults(_) | Row::TooManyResults(_) => return None,
        };

        debug!(searcher = self.id, value = %value, "selected");
        self.host.select_search_result(&value);
        Some(self.close_search_results())
    }

    /// Clears the rows and the input and closes the list.
    ///
    /// The list loses its open state at once; the returned timer hides the
    /// container after the close timeout. Safe to call repeatedly.
    pub fn close_search_results(&mut self) -> Cmd {
        self.reset_session();
        self.close_tag = self.close_tag.wrapping_add(1);
        trace!(searcher = self.id, tag = self.close_tag, "closing");

        let id = self.id;
        let tag = self.close_tag;
        tick(self.config.close_timeout, move |_| {
            Box::new(CloseTimeoutMsg { id, tag }) as Msg
        })
    }

    /// Finishes a close once its timer fires.
    ///
    /// Ignored for other searchers, for superseded timers and when the list
    /// was reopened in the meantime.
    pub(super) fn handle_close_timeout(&mut self, msg: &CloseTimeoutMsg) {
        if msg.id != self.id {
            return;
        }
        if msg.tag != self.close_tag || self.open {
            trace!(searcher = self.id, tag = msg.tag, "stale close timer ignored");
            return;
        }
        self.finish_close();
    }
}
