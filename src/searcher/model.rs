//! Searcher model: state, construction and configuration.

use super::config::{Config, CustomAddFunc, SearcherOptions};
use super::host::SearchHost;
use super::keymap::SearcherKeyMap;
use super::style::SearcherStyles;
use super::types::Row;
use crate::input::{self, Model as Input};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Timer and pointer messages are routed by searcher id.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Incremental search controller bound to one input and one results list.
///
/// The model owns its host. Hosts usually keep their own state (the values
/// chosen so far), reachable through [`Model::host`] and [`Model::host_mut`].
///
/// # Examples
///
/// ```rust
/// use searcher_widgets::searcher::{Model, Row, StaticHost};
///
/// let host = StaticHost::new(vec!["One".into(), "Two".into()]);
/// let mut searcher = Model::new(host).with_custom_add_label("Add New Value: ");
///
/// searcher.search(Some("two"));
/// assert_eq!(searcher.rows(), [Row::SearchResult("Two".into())]);
/// assert_eq!(searcher.highlighted_index(), Some(0));
///
/// searcher.select_highlighted_search_result();
/// assert_eq!(searcher.host().selected(), ["Two".to_string()]);
/// assert!(!searcher.is_search_results_visible());
/// ```
pub struct Model<H> {
    /// Navigation key bindings.
    pub key_map: SearcherKeyMap,
    /// Row and container styles.
    pub styles: SearcherStyles,

    pub(super) host: H,
    pub(super) input: Input,
    pub(super) config: Config,

    pub(super) rows: Vec<Row>,
    pub(super) highlighted: Option<usize>,
    pub(super) scroll_offset: usize,
    pub(super) window_height: usize,
    pub(super) open: bool,
    pub(super) shown: bool,

    pub(super) previous_query_text: String,
    pub(super) value_before_key: String,

    pub(super) listening: bool,
    pub(super) id: usize,
    pub(super) close_tag: usize,
    pub(super) blur_tag: usize,
}

/// Creates a searcher with a default input.
pub fn new<H: SearchHost>(host: H) -> Model<H> {
    Model::new(host)
}

impl<H: SearchHost> Model<H> {
    /// Creates a searcher bound to a fresh input.
    ///
    /// The searcher starts closed and empty, ready to receive messages.
    pub fn new(host: H) -> Self {
        Self::with_input(host, input::new())
    }

    /// Creates a searcher bound to an existing input, e.g. one with a
    /// placeholder or custom styles.
    pub fn with_input(host: H, input: Input) -> Self {
        let mut m = Self {
            key_map: SearcherKeyMap::default(),
            styles: SearcherStyles::default(),
            host,
            input,
            config: Config::default(),
            rows: Vec::new(),
            highlighted: None,
            scroll_offset: 0,
            window_height: 0,
            open: false,
            shown: false,
            previous_query_text: String::new(),
            value_before_key: String::new(),
            listening: false,
            id: next_id(),
            close_tag: 0,
            blur_tag: 0,
        };
        m.initialize();
        m
    }

    /// Starts handling messages and resets to the closed, empty state.
    ///
    /// Calling it again after [`Model::destroy`] re-attaches the searcher.
    pub fn initialize(&mut self) -> &mut Self {
        self.listening = true;
        self.reset_session();
        self.finish_close();
        self
    }

    /// Stops handling messages. Timers already in flight are invalidated.
    pub fn destroy(&mut self) {
        self.listening = false;
        self.close_tag = self.close_tag.wrapping_add(1);
        self.blur_tag = self.blur_tag.wrapping_add(1);
    }

    /// Reports whether the searcher currently handles messages.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Identifier carried by this searcher's messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The bound input.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Mutable access to the bound input.
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets the delay before a closed container is hidden.
    pub fn with_close_timeout(mut self, timeout: Duration) -> Self {
        self.set_close_timeout(timeout);
        self
    }

    /// Sets the delay before a closed container is hidden.
    pub fn set_close_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.close_timeout = timeout;
        self
    }

    /// Enables or disables the custom-add row.
    pub fn with_custom_add_enabled(mut self, enabled: bool) -> Self {
        self.set_custom_add_enabled(enabled);
        self
    }

    /// Enables or disables the custom-add row.
    pub fn set_custom_add_enabled(&mut self, enabled: bool) -> &mut Self {
        self.config.custom_add_enabled = enabled;
        self
    }

    /// Sets the veto run before a custom value is committed.
    pub fn with_custom_add_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) -> bool + Send + 'static,
    {
        self.set_custom_add_callback(Box::new(callback));
        self
    }

    /// Sets the veto run before a custom value is committed.
    pub fn set_custom_add_callback(&mut self, callback: CustomAddFunc) -> &mut Self {
        self.config.custom_add_callback = Some(callback);
        self
    }

    /// Sets the prefix of the custom-add row.
    pub fn with_custom_add_label(mut self, label: impl Into<String>) -> Self {
        self.set_custom_add_label(label);
        self
    }

    /// Sets the prefix of the custom-add row.
    pub fn set_custom_add_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.custom_add_label = label.into();
        self
    }

    /// Sets the prefix of the no-results row.
    pub fn with_no_search_results_label(mut self, label: impl Into<String>) -> Self {
        self.set_no_search_results_label(label);
        self
    }

    /// Sets the prefix of the no-results row.
    pub fn set_no_search_results_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.no_results_label = label.into();
        self
    }

    /// Sets the prefix of the too-many-results row.
    pub fn with_too_many_search_results_label(mut self, label: impl Into<String>) -> Self {
        self.set_too_many_search_results_label(label);
        self
    }

    /// Sets the prefix of the too-many-results row.
    pub fn set_too_many_search_results_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.config.too_many_results_label = label.into();
        self
    }

    /// Sets how many rows show before the list scrolls (at least one).
    pub fn with_max_visible_rows(mut self, rows: usize) -> Self {
        self.set_max_visible_rows(rows);
        self
    }

    /// Sets how many rows show before the list scrolls (at least one).
    pub fn set_max_visible_rows(&mut self, rows: usize) -> &mut Self {
        self.config.max_visible_rows = rows.max(1);
        self
    }

    /// Applies every field set in `options`.
    ///
    /// Like the other setters this does not re-render; the next search
    /// picks the new values up.
    pub fn with_options(mut self, options: &SearcherOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Applies every field set in `options`.
    pub fn set_options(&mut self, options: &SearcherOptions) -> &mut Self {
        self.config.apply(options);
        self
    }

    /// Rendered rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the highlighted row.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted row.
    pub fn get_highlighted_search_result(&self) -> Option<&Row> {
        self.highlighted.and_then(|i| self.rows.get(i))
    }

    /// Whether the results list is open with rows in it.
    pub fn is_search_results_visible(&self) -> bool {
        self.open && !self.rows.is_empty()
    }

    /// Whether the list currently offers to add the typed value.
    pub fn is_custom_add_visible(&self) -> bool {
        self.is_search_results_visible() && self.rows.iter().any(|r| matches!(r, Row::CustomAdd(_)))
    }

    /// Whether the container still takes layout space. Lags
    /// [`Model::is_search_results_visible`] by the close timeout.
    pub fn is_container_shown(&self) -> bool {
        self.shown
    }

    /// First row inside the visible window.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Number of rows the visible window holds.
    pub fn window_height(&self) -> usize {
        self.window_height
    }

    /// Class names of the row at `index`, with `selected` added for the
    /// highlighted row.
    pub fn row_class_names(&self, index: usize) -> Vec<&'static str> {
        let Some(row) = self.rows.get(index) else {
            return Vec::new();
        };
        let mut classes = vec![row.class_name()];
        if self.highlighted == Some(index) {
            classes.push("selected");
        }
        classes
    }

    /// Class names of the results container.
    pub fn container_class_names(&self) -> Vec<&'static str> {
        if self.open {
            vec!["open"]
        } else {
            Vec::new()
        }
    }

    /// Maps a line of the rendered list (0 is the first row line under the
    /// input) to a row index. Used to turn mouse coordinates into
    /// [`super::RowHoverMsg`] and [`super::RowClickMsg`].
    pub fn row_at_line(&self, line: usize) -> Option<usize> {
        if !self.open || line >= self.window_height {
            return None;
        }
        let index = self.scroll_offset + line;
        (index < self.rows.len()).then_some(index)
    }

    pub(super) fn reset_session(&mut self) {
        self.rows.clear();
        self.highlighted = None;
        self.scroll_offset = 0;
        self.input.reset();
        self.open = false;
    }

    pub(super) fn finish_close(&mut self) {
        self.shown = false;
        self.window_height = 0;
        self.input.fit_to_content();
    }
}
