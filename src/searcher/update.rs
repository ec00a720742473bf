//! Event handling: keys, pointer messages, focus and timers.

use super::config::BLUR_GRACE;
use super::host::SearchHost;
use super::model::Model;
use super::types::{BlurTimeoutMsg, CloseTimeoutMsg, InputClickMsg, RowClickMsg, RowHoverMsg};
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use tracing::{debug, trace};

impl<H: SearchHost> Model<H> {
    /// Gives the input focus and opens the results for its current text.
    ///
    /// Cancels a pending blur close.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.blur_tag = self.blur_tag.wrapping_add(1);
        self.input.focus();
        self.search(None)
    }

    /// Takes focus from the input.
    ///
    /// The results stay up for [`BLUR_GRACE`]; the returned timer closes
    /// them unless focus came back first.
    pub fn blur(&mut self) -> Cmd {
        self.input.blur();
        self.blur_tag = self.blur_tag.wrapping_add(1);

        let id = self.id;
        let tag = self.blur_tag;
        tick(BLUR_GRACE, move |_| Box::new(BlurTimeoutMsg { id, tag }) as Msg)
    }

    /// Reports whether the input has focus.
    pub fn focused(&self) -> bool {
        self.input.focused()
    }

    /// First phase of a key press, before the input sees the key.
    ///
    /// Returns `Some(cmd)` when the key is consumed by navigation and must
    /// not reach the input; `None` lets the input edit with it.
    pub fn key_down(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        self.value_before_key = self.input.value();

        if self.key_map.delete.matches(key_msg) {
            self.previous_query_text = self.input.value();
            return None;
        }
        if self.key_map.previous.matches(key_msg) {
            self.highlight_previous_search_result();
            return Some(None);
        }
        if self.key_map.next.matches(key_msg) {
            if self.is_search_results_visible() {
                self.highlight_next_search_result();
                return Some(None);
            }
            return Some(self.search(None));
        }
        if self.key_map.select.matches(key_msg) {
            // selection waits for the second phase
            return Some(None);
        }
        None
    }

    /// Second phase of a key press, after the input applied any edit.
    pub fn key_up(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.key_map.delete.matches(key_msg) {
            if self.input.is_empty() && self.previous_query_text.is_empty() {
                debug!(searcher = self.id, "deleted beyond search input");
                self.host.deleted_beyond_search_input();
                return None;
            }
            return self.search(None);
        }
        if self.key_map.select.matches(key_msg) {
            if self.highlighted.is_some() {
                return self.select_highlighted_search_result();
            }
            return None;
        }
        if self.key_map.close.matches(key_msg) {
            return Some(self.close_search_results());
        }
        if self.key_map.next.matches(key_msg) || self.key_map.previous.matches(key_msg) {
            return None;
        }
        if self.input.value() != self.value_before_key {
            return self.search(None);
        }
        None
    }

    /// Processes a message.
    ///
    /// Key messages run both phases with the input edit in between and are
    /// ignored while the input is blurred. Timer and pointer messages are
    /// matched against this searcher's id. Nothing is handled after
    /// [`Model::destroy`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.listening {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.input.focused() {
                return None;
            }
            let down = match self.key_down(key_msg) {
                Some(cmd) => cmd,
                None => {
                    self.input.handle_key(key_msg);
                    None
                }
            };
            // a later close timer supersedes an earlier one
            return self.key_up(key_msg).or(down);
        }

        if let Some(close) = msg.downcast_ref::<CloseTimeoutMsg>() {
            self.handle_close_timeout(close);
            return None;
        }

        if let Some(blur) = msg.downcast_ref::<BlurTimeoutMsg>() {
            return self.handle_blur_timeout(blur);
        }

        if let Some(hover) = msg.downcast_ref::<RowHoverMsg>() {
            if hover.id == self.id {
                self.highlight_search_result(hover.index);
            }
            return None;
        }

        if let Some(click) = msg.downcast_ref::<RowClickMsg>() {
            if click.id != self.id {
                return None;
            }
            // Selects the hover-highlighted row, not necessarily the clicked one.
            let clickable = self.rows.get(click.index).is_some_and(|r| r.is_selectable());
            if clickable {
                return self.select_highlighted_search_result();
            }
            return None;
        }

        if let Some(click) = msg.downcast_ref::<InputClickMsg>() {
            if click.id != self.id {
                return None;
            }
            if !self.input.focused() {
                return self.focus();
            }
            return self.search(None);
        }

        None
    }

    fn handle_blur_timeout(&mut self, msg: &BlurTimeoutMsg) -> Option<Cmd> {
        if msg.id != self.id {
            return None;
        }
        if msg.tag != self.blur_tag || self.input.focused() {
            trace!(searcher = self.id, tag = msg.tag, "stale blur timer ignored");
            return None;
        }
        Some(self.close_search_results())
    }
}

impl<H: SearchHost> Component for Model<H> {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self)
    }

    /// Blurs without the grace period: the trait has no way to hand back
    /// the timer, so the results close and hide at once. Prefer the
    /// inherent [`Model::blur`] inside an update loop.
    fn blur(&mut self) {
        self.input.blur();
        self.blur_tag = self.blur_tag.wrapping_add(1);
        self.close_tag = self.close_tag.wrapping_add(1);
        self.reset_session();
        self.finish_close();
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl<H: SearchHost + Default + 'static> BubbleTeaModel for Model<H> {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new(H::default());
        let cmd = Model::focus(&mut model);
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
