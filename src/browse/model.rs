//! Core browse model state and builders.

use super::filtering::extract_categories;
use super::keys::BrowseKeyMap;
use super::style::BrowseStyles;
use super::types::{DisplayMode, Filter, ALL_CATEGORIES};
use crate::entry::Entry;
use crate::paginator;
use crate::search;

/// The main browse model, generic over the entry type displayed.
///
/// Holds the full entry set, the active filter and display mode, and the
/// derived presentation state (filtered indices, category set, pagination).
/// Derived state is never mutated directly from outside; it is recomputed
/// whenever the inputs change.
pub struct Model<I: Entry> {
    /// Title shown in the header when the search input is not focused.
    pub title: String,
    /// Styling for all rendered elements.
    pub styles: BrowseStyles,
    /// Key bindings for browse-level actions.
    pub keymap: BrowseKeyMap,
    /// Whether the status bar is rendered in the footer.
    pub show_status_bar: bool,

    pub(super) entries: Vec<I>,
    pub(super) mode: DisplayMode,
    pub(super) filter: Filter,
    /// Indices into `entries` that pass the active filter, in entry order.
    pub(super) filtered: Vec<usize>,
    pub(super) per_page: usize,
    /// How many filtered entries are shown in load-more mode.
    pub(super) visible_count: usize,
    /// Derived category set, always starting with the "All" sentinel.
    pub(super) categories: Vec<String>,
    pub(super) paginator: paginator::Model,
    pub(super) search: search::Model,
    pub(super) width: usize,

    status_item_singular: String,
    status_item_plural: String,
}

impl<I: Entry> Model<I> {
    /// Creates a new browse model over the given entries.
    ///
    /// `per_page` is clamped to at least 1. The filter starts empty (no
    /// query, "All" category) so every entry is initially visible.
    pub fn new(entries: Vec<I>, mode: DisplayMode, per_page: usize, width: usize) -> Self {
        let per_page = per_page.max(1);

        let mut p = paginator::Model::new();
        p.per_page = per_page;

        let mut m = Self {
            title: String::from("Browse"),
            styles: BrowseStyles::default(),
            keymap: BrowseKeyMap::default(),
            show_status_bar: true,
            entries,
            mode,
            filter: Filter::default(),
            filtered: Vec::new(),
            per_page,
            visible_count: per_page,
            categories: vec![ALL_CATEGORIES.to_string()],
            paginator: p,
            search: search::Model::new(),
            width,
            status_item_singular: String::from("item"),
            status_item_plural: String::from("items"),
        };
        m.categories = extract_categories(&m.entries);
        m.apply_filter();
        m
    }

    /// Sets a custom title, builder style.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the display mode, builder style.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Sets custom styles, builder style.
    pub fn with_styles(mut self, styles: BrowseStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the singular and plural nouns used by the status bar.
    ///
    /// The default is "item" / "items".
    pub fn set_status_bar_item_name(&mut self, singular: &str, plural: &str) {
        self.status_item_singular = singular.to_string();
        self.status_item_plural = plural.to_string();
    }

    /// Returns the status bar noun appropriate for `count`.
    pub(super) fn status_item_name(&self, count: usize) -> &str {
        if count == 1 {
            &self.status_item_singular
        } else {
            &self.status_item_plural
        }
    }

    /// Total number of entries, ignoring the active filter.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the entry set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries passing the active filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The derived category list, beginning with the "All" sentinel.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The currently selected category.
    pub fn selected_category(&self) -> &str {
        &self.filter.category
    }

    /// The active search query.
    pub fn query(&self) -> &str {
        &self.filter.query
    }

    /// The active display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The current page, 1-indexed. Always 1 outside paged mode.
    pub fn page(&self) -> usize {
        match self.mode {
            DisplayMode::Paged => self.paginator.page,
            _ => 1,
        }
    }

    /// Total number of pages for the filtered set. At least 1.
    pub fn total_pages(&self) -> usize {
        match self.mode {
            DisplayMode::Paged => self.paginator.total_pages,
            _ => 1,
        }
    }

    /// Read access to the underlying paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Read access to the search input.
    pub fn search(&self) -> &search::Model {
        &self.search
    }

    /// Mutable access to the search input, for configuring prompt,
    /// placeholder or debounce interval.
    pub fn search_mut(&mut self) -> &mut search::Model {
        &mut self.search
    }

    /// Replaces the entry set. The category list is re-derived and the
    /// filter re-applied; if the selected category no longer exists it
    /// falls back to "All".
    pub fn set_entries(&mut self, entries: Vec<I>) {
        self.entries = entries;
        self.categories = extract_categories(&self.entries);
        if !self.categories.iter().any(|c| *c == self.filter.category) {
            self.filter.category = ALL_CATEGORIES.to_string();
        }
        self.apply_filter();
    }

    /// Sets the search query and re-applies the filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.apply_filter();
    }

    /// Selects a category. Unknown categories are ignored so the selection
    /// always names a member of the derived set.
    pub fn set_category(&mut self, category: &str) {
        if !self.categories.iter().any(|c| c == category) {
            return;
        }
        if self.filter.category == category {
            return;
        }
        self.filter.category = category.to_string();
        self.apply_filter();
    }

    /// Cycles to the next category, wrapping past the end.
    pub fn next_category(&mut self) {
        self.cycle_category(1);
    }

    /// Cycles to the previous category, wrapping past the start.
    pub fn prev_category(&mut self) {
        self.cycle_category(-1);
    }

    fn cycle_category(&mut self, dir: isize) {
        if self.categories.len() < 2 {
            return;
        }
        let len = self.categories.len() as isize;
        let cur = self
            .categories
            .iter()
            .position(|c| *c == self.filter.category)
            .unwrap_or(0) as isize;
        let next = (cur + dir).rem_euclid(len) as usize;
        self.filter.category = self.categories[next].clone();
        self.apply_filter();
    }

    /// Clears both the query and the category selection.
    pub fn clear_filter(&mut self) {
        if self.filter.is_empty() {
            return;
        }
        self.filter = Filter::default();
        self.apply_filter();
    }

    /// Switches display mode, resetting the window position.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.reset_window();
    }

    /// Sets the render width used for title truncation.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Resets the window to the start: page 1 and one page of visible
    /// entries.
    pub(super) fn reset_window(&mut self) {
        self.paginator.go_to(1);
        self.visible_count = self.per_page;
    }
}
