//! A pagination component for bubbletea-rs content browsers.
//!
//! This component calculates pagination state and renders the pagination
//! control itself; it does not render pages of content. It exposes slice
//! bounds for the current page and a windowed range of page-number buttons
//! with ellipsis placement and boundary pinning, the way web-style paged
//! lists render their controls.
//!
//! Pages are 1-indexed: `page` is always within `[1, total_pages]`, and
//! every mutation clamps rather than errors.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// The rendering style of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// A row of numbered page buttons with ellipses (e.g. "1 … 4 5 6 … 20").
    #[default]
    Buttons,
    /// Compact Arabic numerals (e.g. "5/20").
    Arabic,
}

/// Key bindings for paginator navigation.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::paginator::PaginatorKeyMap;
/// use browse_widgets::key;
///
/// let custom = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a"]),
///         key::with_help("a", "previous page"),
///     ]),
///     ..PaginatorKeyMap::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Navigate to the previous page. Default: PageUp, Left, 'h'.
    pub prev_page: key::Binding,
    /// Navigate to the next page. Default: PageDown, Right, 'l'.
    pub next_page: key::Binding,
    /// Jump to the first page. Default: Home, 'g'.
    pub first_page: key::Binding,
    /// Jump to the last page. Default: End, 'G'.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Styles for the rendered pagination control.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// Style for the current page's button.
    pub active_page: Style,
    /// Style for every other page button.
    pub inactive_page: Style,
    /// Style for the ellipsis between the window and a pinned boundary.
    pub ellipsis: Style,
    /// Style for the Arabic "current/total" form.
    pub arabic: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            inactive_page: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            ellipsis: Style::new().foreground(subdued.clone()),
            arabic: Style::new().foreground(subdued),
        }
    }
}

/// The windowed range of page buttons to render for the current state.
///
/// Produced by [`Model::page_range`]. `pages` is a run of consecutive page
/// numbers centered on the current page; the flags say whether standalone
/// first/last buttons and ellipses belong around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    /// Consecutive page numbers to render as buttons.
    pub pages: Vec<usize>,
    /// Render page 1 as a standalone button before the window.
    pub show_first: bool,
    /// Render the last page as a standalone button after the window.
    pub show_last: bool,
    /// Render an ellipsis between page 1 and the window.
    pub leading_ellipsis: bool,
    /// Render an ellipsis between the window and the last page.
    pub trailing_ellipsis: bool,
}

/// A paginator model handling 1-indexed page state and rendering.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10).with_total_items(95);
/// assert_eq!(paginator.total_pages, 10);
/// assert_eq!(paginator.page, 1);
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
///
/// let (start, end) = paginator.get_slice_bounds(95);
/// assert_eq!((start, end), (10, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The rendering style (buttons or Arabic).
    pub paginator_type: Type,
    /// The current page, always within `[1, total_pages]`.
    pub page: usize,
    /// The number of items per page, at least 1.
    pub per_page: usize,
    /// The total number of pages, at least 1.
    pub total_pages: usize,
    /// Maximum number of page buttons in the window, at least 1.
    pub max_visible: usize,

    /// The format string for Arabic mode (e.g. "%d/%d").
    pub arabic_format: String,
    /// Rendering styles.
    pub styles: PaginatorStyles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            max_visible: 7,
            arabic_format: "%d/%d".to_string(),
            styles: PaginatorStyles::default(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the number of items per page.
    ///
    /// Values less than 1 are clamped to 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Sets the total number of items and recalculates pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the maximum page-button window size (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    /// Calculates and sets the total number of pages from an item count.
    ///
    /// The result is always at least 1, even for 0 items. The current page
    /// is clamped back into range if the page count shrank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use browse_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    /// paginator.set_total_items(23);
    /// assert_eq!(paginator.total_pages, 3);
    ///
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        self.page = self.clamp(self.page);
    }

    /// Sets the total number of pages directly, minimum 1.
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages.max(1);
        self.page = self.clamp(self.page);
    }

    /// Clamps an arbitrary page number into `[1, total_pages]`.
    pub fn clamp(&self, page: usize) -> usize {
        page.max(1).min(self.total_pages)
    }

    /// Navigates to the given page, clamping out-of-range values.
    pub fn go_to(&mut self, page: usize) {
        self.page = self.clamp(page);
    }

    /// Navigates to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Navigates to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages {
            self.page += 1;
        }
    }

    /// Returns true if the paginator is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true if the paginator is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Whether a Previous control should be enabled.
    pub fn can_prev(&self) -> bool {
        !self.on_first_page()
    }

    /// Whether a Next control should be enabled.
    pub fn can_next(&self) -> bool {
        !self.on_last_page()
    }

    /// Calculates slice bounds for the current page.
    ///
    /// Given the length of the data being paginated, returns `(start, end)`
    /// indices usable directly with slice notation. Bounds never exceed
    /// `length`, and an out-of-range `page` is clamped before any
    /// arithmetic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use browse_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(23);
    /// paginator.go_to(3);
    /// assert_eq!(paginator.get_slice_bounds(23), (20, 23));
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        // `page` is a public field, so clamp before doing arithmetic on it.
        let page = self.clamp(self.page);
        let start = ((page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Computes the windowed page-button range for the current state.
    ///
    /// Returns `None` when `total_pages <= 1`, meaning no pagination UI
    /// should render at all. Otherwise the window holds
    /// `min(max_visible, total_pages)` consecutive page numbers centered on
    /// the current page and pinned at the boundaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use browse_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(1).with_total_items(20);
    /// paginator.go_to(10);
    ///
    /// let range = paginator.page_range().unwrap();
    /// assert_eq!(range.pages, vec![7, 8, 9, 10, 11, 12, 13]);
    /// assert!(range.show_first && range.leading_ellipsis);
    /// assert!(range.show_last && range.trailing_ellipsis);
    /// ```
    pub fn page_range(&self) -> Option<PageRange> {
        if self.total_pages <= 1 {
            return None;
        }
        let page = self.clamp(self.page);
        let max_visible = self.max_visible.max(1);

        let delta = max_visible / 2;
        let mut start = page.saturating_sub(delta).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        // Re-anchor when the window hit the upper bound short of max_visible.
        start = (end + 1).saturating_sub(max_visible).max(1);

        Some(PageRange {
            pages: (start..=end).collect(),
            show_first: start > 1,
            show_last: end < self.total_pages,
            leading_ellipsis: start > 2,
            trailing_ellipsis: end < self.total_pages.saturating_sub(1),
        })
    }

    /// Updates the paginator from key messages.
    ///
    /// Call this from your application's `update()` to handle page
    /// navigation key presses.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.keymap.first_page.matches(key_msg) {
                self.go_to(1);
            } else if self.keymap.last_page.matches(key_msg) {
                self.go_to(self.total_pages);
            }
        }
    }

    /// Renders the paginator as a string.
    ///
    /// Buttons mode renders the windowed page numbers with ellipses and
    /// pinned boundaries; an empty string means no pagination UI is needed.
    /// Arabic mode renders the compact "current/total" form.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Buttons => self.buttons_view(),
            Type::Arabic => self.arabic_view(),
        }
    }

    fn arabic_view(&self) -> String {
        let text = self
            .arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1);
        self.styles.arabic.render(&text)
    }

    fn buttons_view(&self) -> String {
        let Some(range) = self.page_range() else {
            return String::new();
        };
        let mut parts = Vec::new();
        if range.show_first {
            parts.push(self.styles.inactive_page.render("1"));
        }
        if range.leading_ellipsis {
            parts.push(self.styles.ellipsis.render("…"));
        }
        for p in &range.pages {
            if *p == self.page {
                parts.push(self.styles.active_page.render(&p.to_string()));
            } else {
                parts.push(self.styles.inactive_page.render(&p.to_string()));
            }
        }
        if range.trailing_ellipsis {
            parts.push(self.styles.ellipsis.render("…"));
        }
        if range.show_last {
            parts.push(self.styles.inactive_page.render(&self.total_pages.to_string()));
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(total: usize, current: usize, max_visible: usize) -> Model {
        let mut m = Model::new().with_max_visible(max_visible);
        m.set_total_pages(total);
        m.go_to(current);
        m
    }

    #[test]
    fn test_new_defaults() {
        let m = Model::new();
        assert_eq!(m.page, 1);
        assert_eq!(m.per_page, 1);
        assert_eq!(m.total_pages, 1);
        assert_eq!(m.max_visible, 7);
    }

    #[test]
    fn test_per_page_clamps_to_one() {
        let m = Model::new().with_per_page(0);
        assert_eq!(m.per_page, 1);
    }

    #[test]
    fn test_total_items_rounds_up() {
        let m = Model::new().with_per_page(10).with_total_items(95);
        assert_eq!(m.total_pages, 10);
    }

    #[test]
    fn test_zero_items_still_one_page() {
        let m = Model::new().with_per_page(10).with_total_items(0);
        assert_eq!(m.total_pages, 1);
        assert_eq!(m.get_slice_bounds(0), (0, 0));
    }

    #[test]
    fn test_shrinking_items_clamps_page() {
        let mut m = Model::new().with_per_page(10).with_total_items(100);
        m.go_to(10);
        m.set_total_items(25);
        assert_eq!(m.total_pages, 3);
        assert_eq!(m.page, 3);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let m = pages(5, 3, 7);
        for p in [0usize, 1, 3, 5, 99] {
            let once = m.clamp(p);
            assert!((1..=5).contains(&once));
            assert_eq!(m.clamp(once), once);
        }
    }

    #[test]
    fn test_prev_next_stop_at_bounds() {
        let mut m = pages(3, 1, 7);
        m.prev_page();
        assert_eq!(m.page, 1);
        m.next_page();
        m.next_page();
        m.next_page();
        assert_eq!(m.page, 3);
        assert!(!m.can_next());
        assert!(m.can_prev());
    }

    #[test]
    fn test_slice_bounds_partial_last_page() {
        // 23 items, 10 per page, page 3 holds items 21-23.
        let mut m = Model::new().with_per_page(10).with_total_items(23);
        m.go_to(3);
        assert_eq!(m.total_pages, 3);
        assert_eq!(m.get_slice_bounds(23), (20, 23));
        assert_eq!(m.items_on_page(23), 3);
    }

    #[test]
    fn test_slice_bounds_clamp_out_of_range_page() {
        // `page` is a public field; writing garbage into it must still
        // yield in-range bounds instead of panicking.
        let mut m = Model::new().with_per_page(10).with_total_items(30);
        m.page = 0;
        assert_eq!(m.get_slice_bounds(30), (0, 10));
        m.page = 99;
        assert_eq!(m.get_slice_bounds(30), (20, 30));
    }

    #[test]
    fn test_page_range_none_for_single_page() {
        assert!(pages(1, 1, 7).page_range().is_none());
    }

    #[test]
    fn test_page_range_centered_with_both_ellipses() {
        let range = pages(20, 10, 7).page_range().unwrap();
        assert_eq!(range.pages, vec![7, 8, 9, 10, 11, 12, 13]);
        assert!(range.show_first);
        assert!(range.leading_ellipsis);
        assert!(range.show_last);
        assert!(range.trailing_ellipsis);
    }

    #[test]
    fn test_page_range_pinned_at_start() {
        let range = pages(20, 1, 7).page_range().unwrap();
        assert_eq!(range.pages, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!range.show_first);
        assert!(!range.leading_ellipsis);
        assert!(range.show_last);
        assert!(range.trailing_ellipsis);
    }

    #[test]
    fn test_page_range_pinned_at_end() {
        let range = pages(20, 20, 7).page_range().unwrap();
        assert_eq!(range.pages, vec![14, 15, 16, 17, 18, 19, 20]);
        assert!(range.show_first);
        assert!(range.leading_ellipsis);
        assert!(!range.show_last);
        assert!(!range.trailing_ellipsis);
    }

    #[test]
    fn test_page_range_no_gap_no_ellipsis() {
        // Window starts at page 2: first page pinned, but no gap to elide.
        let range = pages(9, 5, 7).page_range().unwrap();
        assert_eq!(range.pages, vec![2, 3, 4, 5, 6, 7, 8]);
        assert!(range.show_first);
        assert!(!range.leading_ellipsis);
        assert!(range.show_last);
        assert!(!range.trailing_ellipsis);
    }

    #[test]
    fn test_page_range_window_size_invariant() {
        for total in 2..=25usize {
            for current in 1..=total {
                let range = pages(total, current, 7).page_range().unwrap();
                assert_eq!(
                    range.pages.len(),
                    total.min(7),
                    "total={total} current={current}"
                );
                assert!(range.pages.contains(&current));
            }
        }
    }

    #[test]
    fn test_page_range_fewer_pages_than_window() {
        let range = pages(3, 2, 7).page_range().unwrap();
        assert_eq!(range.pages, vec![1, 2, 3]);
        assert!(!range.show_first);
        assert!(!range.show_last);
    }

    #[test]
    fn test_buttons_view_empty_for_single_page() {
        assert_eq!(pages(1, 1, 7).buttons_view(), "");
    }

    #[test]
    fn test_arabic_view_format() {
        let mut m = pages(20, 5, 7);
        m.paginator_type = Type::Arabic;
        assert!(m.view().contains("5/20"));
    }

    #[test]
    fn test_update_navigates_on_keys() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut m = pages(5, 3, 7);
        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        m.update(&msg);
        assert_eq!(m.page, 4);

        let msg: Msg = Box::new(KeyMsg {
            key: KeyCode::Home,
            modifiers: KeyModifiers::NONE,
        });
        m.update(&msg);
        assert_eq!(m.page, 1);
    }
}
