//! Key bindings for navigating and committing search results.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Navigation bindings of the searcher.
///
/// Editing keys are handled by the input's own keymap; these bindings are
/// checked first.
#[derive(Debug, Clone)]
pub struct SearcherKeyMap {
    /// Highlight the next row, or open the results when closed.
    pub next: Binding,
    /// Highlight the previous row.
    pub previous: Binding,
    /// Select the highlighted row.
    pub select: Binding,
    /// Close the results.
    pub close: Binding,
    /// Delete backward; on an empty input this reaches past the search box.
    pub delete: Binding,
}

impl Default for SearcherKeyMap {
    fn default() -> Self {
        Self {
            next: new_binding(vec![with_keys_str(&["down", "ctrl+n"]), with_help("↓", "next")]),
            previous: new_binding(vec![
                with_keys_str(&["up", "ctrl+p"]),
                with_help("↑", "previous"),
            ]),
            select: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "select")]),
            close: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "close")]),
            delete: new_binding(vec![
                with_keys_str(&["backspace", "ctrl+h"]),
                with_help("backspace", "delete"),
            ]),
        }
    }
}

impl key::KeyMap for SearcherKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.previous, &self.select, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.next, &self.previous],
            vec![&self.select, &self.close, &self.delete],
        ]
    }
}
