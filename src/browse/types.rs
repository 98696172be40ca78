//! Core types for the browse component.
//!
//! This module contains the filter state, the display-mode enum, and the
//! windowing metadata the model exposes to callers.

/// The sentinel category meaning "no category filter applied".
///
/// It is always the first element of a derived category list and is never
/// matched against entry labels.
pub const ALL_CATEGORIES: &str = "All";

/// Governs how many filtered entries are visible at once.
///
/// The three modes are mutually exclusive; switching modes resets the
/// browse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Show exactly one page of entries at a time, with pagination controls.
    #[default]
    Paged,
    /// Show every filtered entry, no windowing.
    All,
    /// Show a growing prefix of the filtered entries, extended on demand.
    LoadMore,
}

/// The user-controlled filter: a search query and a selected category.
///
/// The query matches case-insensitively as a plain substring; the category
/// matches entry labels exactly, unless it is the [`ALL_CATEGORIES`]
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Committed search text; empty means no search filter.
    pub query: String,
    /// Selected category; [`ALL_CATEGORIES`] means no category filter.
    pub category: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl Filter {
    /// Returns true when neither the query nor the category restricts
    /// anything.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category == ALL_CATEGORIES
    }
}

/// Metadata describing the current window over the filtered set.
///
/// Produced by [`Model::window`](super::Model::window) alongside
/// the visible entries themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    /// Number of entries currently visible.
    pub visible: usize,
    /// Number of entries matching the filter.
    pub filtered: usize,
    /// Whether more entries can be revealed (load-more mode only).
    pub has_more: bool,
    /// Total pages for the filtered set; always at least 1.
    pub total_pages: usize,
}
