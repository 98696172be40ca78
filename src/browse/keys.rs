//! Key bindings for browse navigation and filtering.
//!
//! Page navigation keys live on the embedded paginator's own key map; this
//! map covers search, category selection, and load-more.

use crate::key;

/// Key bindings for browse filtering, category selection, and load-more.
#[derive(Debug, Clone)]
pub struct BrowseKeyMap {
    /// Enter search mode.
    pub search: key::Binding,
    /// Clear the active search query.
    pub clear_filter: key::Binding,
    /// Select the next category.
    pub next_category: key::Binding,
    /// Select the previous category.
    pub prev_category: key::Binding,
    /// Reveal the next batch of entries (load-more mode).
    pub load_more: key::Binding,
    /// Quit.
    pub quit: key::Binding,
}

impl Default for BrowseKeyMap {
    fn default() -> Self {
        Self {
            search: key::new_binding(vec![
                key::with_keys_str(&["/"]),
                key::with_help("/", "search"),
            ]),
            clear_filter: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear search"),
            ]),
            next_category: key::new_binding(vec![
                key::with_keys_str(&["tab", "c"]),
                key::with_help("tab/c", "next category"),
            ]),
            prev_category: key::new_binding(vec![
                key::with_keys_str(&["backtab", "C"]),
                key::with_help("shift+tab/C", "prev category"),
            ]),
            load_more: key::new_binding(vec![
                key::with_keys_str(&["space", "m"]),
                key::with_help("space/m", "load more"),
            ]),
            quit: key::new_binding(vec![
                key::with_keys_str(&["q", "ctrl+c"]),
                key::with_help("q", "quit"),
            ]),
        }
    }
}

impl key::KeyMap for BrowseKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.search,
            &self.next_category,
            &self.load_more,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next_category, &self.prev_category, &self.load_more],
            vec![&self.search, &self.clear_filter],
            vec![&self.quit],
        ]
    }
}
