#![warn(missing_docs)]

//! # searcher-widgets
//!
//! Keyboard-driven incremental search for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! The centerpiece is the [`searcher`] component: a text input bound to a
//! results list. Each edit queries a [`SearchHost`], the results are shown as
//! rows with at most one highlighted, and choosing a row hands the value back
//! to the host. Multi-select and phrase-builder widgets are built on top of it
//! by implementing [`SearchHost`] over their own state.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Searcher`] | Incremental search with highlight, custom-add and close timers |
//! | [`SearchInput`] | Single-line input that grows with its text |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use searcher_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     searcher: Searcher<StaticHost>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let host = StaticHost::new(vec!["Red".into(), "Green".into(), "Blue".into()]);
//!         let mut searcher = Searcher::new(host);
//!         let cmd = searcher.focus();
//!         (Self { searcher }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.searcher.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Colors: {}", self.searcher.view())
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Searches, selections and timer decisions are emitted as [`tracing`]
//! events at `debug` and `trace` level. Install any subscriber to see them.

pub mod error;
pub mod input;
pub mod key;
pub mod searcher;

use bubbletea_rs::Cmd;

/// Focus management shared by the components of this crate.
///
/// ```rust
/// use searcher_widgets::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _ = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// cycle(&mut input_new());
/// cycle(&mut Searcher::new(StaticHost::default()));
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    ///
    /// May return a command, e.g. the close timer of a searcher that found
    /// nothing to show.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Reports whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use error::{Result, SearcherError};
pub use input::{
    default_key_map as input_default_key_map, new as input_new, KeyMap as InputKeyMap,
    Model as SearchInput,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    BindingOpt, Help as KeyHelp, KeyMap, KeyPress,
};
pub use searcher::{
    new as searcher_new, Config as SearcherConfig, Model as Searcher, Row, SearchHost,
    SearchResponse, SearcherKeyMap, SearcherOptions, SearcherStyles, StaticHost,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use searcher_widgets::prelude::*;
///
/// let searcher = Searcher::new(StaticHost::default());
/// assert!(searcher.rows().is_empty());
/// ```
pub mod prelude {
    pub use crate::error::{Result, SearcherError};
    pub use crate::input::{new as input_new, Model as SearchInput};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::searcher::{
        new as searcher_new, Model as Searcher, Row, SearchHost, SearchResponse, SearcherOptions,
        StaticHost,
    };
    pub use crate::Component;
}
