//! Styles for the results list.
//!
//! Every row kind has its own style, mirroring the class names returned by
//! [`super::Row::class_name`]. The highlighted row is drawn with `selected`
//! instead of its kind style.

use lipgloss_extras::prelude::*;

/// Styles used when rendering the results list.
#[derive(Debug, Clone)]
pub struct SearcherStyles {
    /// Rows holding a match.
    pub search_result: Style,
    /// The custom-add row.
    pub custom_add: Style,
    /// The no-results notice.
    pub no_search_results: Style,
    /// The too-many-results notice.
    pub too_many_search_results: Style,
    /// The highlighted row.
    pub selected: Style,
    /// The container while it displays rows.
    pub container_open: Style,
}

impl Default for SearcherStyles {
    fn default() -> Self {
        Self {
            search_result: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            custom_add: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            no_search_results: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .italic(true),
            too_many_search_results: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .italic(true),
            selected: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            container_open: Style::new().padding(0, 1, 0, 1),
        }
    }
}
