//! View rendering for the searcher.

use super::host::SearchHost;
use super::model::Model;
use super::types::Row;

impl<H: SearchHost> Model<H> {
    /// Renders the input followed by the visible window of rows.
    ///
    /// While a close is in progress the container keeps its height as
    /// blank lines so the layout does not jump until the close timer fires.
    pub fn view(&self) -> String {
        let mut out = self.input.view();

        if self.open {
            let lines: Vec<String> = self
                .rows
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(self.window_height)
                .map(|(i, row)| self.render_row(i, row))
                .collect();
            out.push('\n');
            out.push_str(&self.styles.container_open.render(&lines.join("\n")));
        } else if self.shown && self.window_height > 0 {
            out.push('\n');
            out.push_str(&vec![""; self.window_height].join("\n"));
        }

        out
    }

    fn render_row(&self, index: usize, row: &Row) -> String {
        let label = row.label(&self.config);
        let style = if self.highlighted == Some(index) {
            &self.styles.selected
        } else {
            match row {
                Row::SearchResult(_) => &self.styles.search_result,
                Row::CustomAdd(_) => &self.styles.custom_add,
                Row::NoResults(_) => &self.styles.no_search_results,
                Row::TooManyResults(_) => &self.styles.too_many_search_results,
            }
        };
        style.render(&label)
    }
}
