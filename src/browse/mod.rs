//! Browse component for filterable, windowed entry collections.
//!
//! This module composes the crate's building blocks into a single
//! component: a [search](crate::search) input feeding a [`Filter`], a
//! derived category row, and one of three windowing strategies over the
//! filtered set, with a [paginator](crate::paginator) driving paged mode.
//!
//! # Architecture
//!
//! The model keeps the full entry set and derives everything else from
//! it. A filter change recomputes the filtered index list, re-derives
//! pagination and snaps the window back to the start, so the presented
//! slice is always consistent with what the filter selected.
//!
//! # Example
//!
//! ```
//! use browse_widgets::browse::{DisplayMode, Model};
//! use browse_widgets::entry::DefaultEntry;
//!
//! let entries = vec![
//!     DefaultEntry::new("Learning REACT Hooks", "A video course")
//!         .with_category("Video"),
//!     DefaultEntry::new("Rust in Action", "Systems programming")
//!         .with_category("Book"),
//! ];
//!
//! let mut browse = Model::new(entries, DisplayMode::Paged, 10, 80)
//!     .with_title("Library");
//! browse.set_query("react");
//! assert_eq!(browse.filtered_len(), 1);
//! ```

mod filtering;
mod keys;
mod model;
mod rendering;
mod style;
mod types;
mod windowing;

#[cfg(test)]
mod tests;

pub use filtering::{extract_categories, matches};
pub use keys::BrowseKeyMap;
pub use model::Model;
pub use style::{BrowseStyles, BULLET, ELLIPSIS};
pub use types::{DisplayMode, Filter, WindowInfo, ALL_CATEGORIES};

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

use crate::entry::{DefaultEntry, Entry};
use crate::search::QueryMsg;
use crate::Component;

impl<I: Entry> Model<I> {
    /// Processes a message, routing it to the search input, the category
    /// cycling keys, the load-more key or the paginator as appropriate.
    ///
    /// While the search input is focused it owns all key input; submit and
    /// clear additionally return focus to the browse view. Committed
    /// queries arrive as [`QueryMsg`] and are applied here.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        // Committed search queries and pending debounce ticks are handled
        // even when focus has moved on.
        if let Some(query_msg) = msg.downcast_ref::<QueryMsg>() {
            if query_msg.id == self.search.id() {
                self.set_query(query_msg.query.clone());
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.search.focused() {
                let leaving = self.search.keymap.submit.matches(key_msg)
                    || self.search.keymap.clear.matches(key_msg);
                let cmd = self.search.update(msg);
                if leaving {
                    self.search.blur();
                }
                return cmd;
            }

            if self.keymap.search.matches(key_msg) {
                return self.search.focus();
            }
            if self.keymap.clear_filter.matches(key_msg) {
                self.search.reset();
                self.clear_filter();
                return None;
            }
            if self.keymap.next_category.matches(key_msg) {
                self.next_category();
                return None;
            }
            if self.keymap.prev_category.matches(key_msg) {
                self.prev_category();
                return None;
            }
            if self.keymap.load_more.matches(key_msg) {
                self.load_more();
                return None;
            }
            if self.keymap.quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
        }

        // Debounce ticks for the search input, page navigation keys for
        // the paginator.
        let cmd = self.search.update(msg);
        if cmd.is_some() {
            return cmd;
        }
        if self.mode() == DisplayMode::Paged {
            self.paginator.update(msg);
        }
        None
    }
}

impl<I: Entry + Send + 'static> BubbleTeaModel for Model<I> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), DisplayMode::default(), 10, 80), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

impl Default for Model<DefaultEntry> {
    fn default() -> Self {
        Self::new(Vec::new(), DisplayMode::default(), 10, 80)
    }
}
