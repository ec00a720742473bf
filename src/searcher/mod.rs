//! Keyboard-driven incremental search component.
//!
//! A searcher binds a text input to a results list. Every edit runs a search
//! against a [`SearchHost`], the results become [`Row`]s, one row at a time
//! is highlighted, and choosing a row hands its value back to the host. It
//! is the building block of multi-select and phrase-builder style widgets,
//! which implement [`SearchHost`] over their own option lists.
//!
//! # Basic Usage
//!
//! ```rust
//! use searcher_widgets::searcher::{Model, Row, StaticHost};
//!
//! let host = StaticHost::new(vec!["One".into(), "Two".into(), "Three".into()]);
//! let mut searcher = Model::new(host).with_custom_add_label("Add New Value: ");
//! let _ = searcher.focus();
//!
//! searcher.search(Some("tw"));
//! assert_eq!(searcher.rows()[0], Row::SearchResult("Two".into()));
//! assert!(searcher.is_custom_add_visible());
//! ```
//!
//! # Rows
//!
//! | Row | Shown when |
//! |-----|------------|
//! | `SearchResult` | one per host result |
//! | `CustomAdd` | custom add enabled, no exact match, host does not veto |
//! | `NoResults` | nothing else matched a non-empty query |
//! | `TooManyResults` | the host truncated its results (always last) |
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `↓` | next row, or open the results when closed |
//! | `↑` | previous row |
//! | `enter` | select the highlighted row |
//! | `esc` | close the results |
//! | `backspace` on an empty input | [`SearchHost::deleted_beyond_search_input`] |
//! | anything that changes the text | search again |
//!
//! # Timers
//!
//! Closing drops the open state at once and hides the container after
//! [`Config::close_timeout`]. Blurring closes after [`BLUR_GRACE`] unless
//! focus returns. Both timers are commands returned from the triggering
//! call; their messages must be routed back through [`Model::update`].
//! Superseded timers are ignored.

pub mod config;
pub mod host;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod style;
pub mod types;
pub mod update;
pub mod view;


pub use config::{
    Config, CustomAddFunc, SearcherOptions, BLUR_GRACE, DEFAULT_CLOSE_TIMEOUT,
    DEFAULT_CUSTOM_ADD_LABEL, DEFAULT_MAX_VISIBLE_ROWS, DEFAULT_NO_RESULTS_LABEL,
    DEFAULT_TOO_MANY_RESULTS_LABEL,
};
pub use host::{SearchHost, StaticHost};
pub use keymap::SearcherKeyMap;
pub use model::{new, Model};
pub use style::SearcherStyles;
pub use types::{
    BlurTimeoutMsg, CloseTimeoutMsg, InputClickMsg, Row, RowClickMsg, RowHoverMsg, SearchResponse,
};
