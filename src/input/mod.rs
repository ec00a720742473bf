//! Single-line search input bound to a searcher.
//!
//! The input holds the query text, a cursor and a placeholder. Its width
//! follows its content: [`Model::fit_to_content`] sizes the field to the
//! placeholder (when empty) or the current text, the way a search box grows
//! while the user types.
//!
//! # Basic Usage
//!
//! ```rust
//! use searcher_widgets::input::new;
//!
//! let mut input = new();
//! input.set_placeholder("Search...");
//! input.focus();
//! input.set_value("two");
//! input.fit_to_content();
//! assert_eq!(input.value(), "two");
//! assert_eq!(input.width(), 4);
//! ```
//!
//! The input is usually owned by a [`crate::searcher::Model`], which forwards
//! editing keys to it. It also implements `bubbletea_rs::Model` for
//! standalone use.

pub mod keymap;
pub mod model;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
