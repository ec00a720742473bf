//! View rendering for the search input.

use super::model::Model;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the prompt followed by the text, padded to the field width.
    ///
    /// While focused, the character under the cursor is drawn with
    /// `cursor_style`; at the end of the text the cursor occupies the spare
    /// column kept by [`Model::fit_to_content`].
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let text: String = self.value.iter().collect();
        let mut v = String::new();

        if self.focus {
            let before: String = self.value[..self.pos].iter().collect();
            v.push_str(&self.text_style.render(&before));
            match self.value.get(self.pos) {
                Some(ch) => {
                    v.push_str(&self.cursor_style.render(&ch.to_string()));
                    let after: String = self.value[self.pos + 1..].iter().collect();
                    v.push_str(&self.text_style.render(&after));
                }
                None => v.push_str(&self.cursor_style.render(" ")),
            }
        } else {
            v.push_str(&self.text_style.render(&text));
        }

        let mut used = UnicodeWidthStr::width(text.as_str());
        if self.focus && self.pos == self.value.len() {
            used += 1;
        }
        let padding = self.width.saturating_sub(used);
        v.push_str(&" ".repeat(padding));

        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self) -> String {
        let mut v = String::new();
        let mut rest = self.placeholder.as_str();

        if self.focus {
            let first = rest.chars().next().unwrap_or(' ');
            v.push_str(&self.cursor_style.render(&first.to_string()));
            rest = rest.get(first.len_utf8()..).unwrap_or("");
        }
        v.push_str(&self.placeholder_style.render(rest));

        let used = UnicodeWidthStr::width(self.placeholder.as_str()).max(1);
        v.push_str(&" ".repeat(self.width.saturating_sub(used)));
        v
    }
}
