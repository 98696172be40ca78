#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/browse-widgets/")]

//! # browse-widgets
//!
//! Filtering, windowing and pagination components for building
//! content-browsing terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! browse-widgets turns a flat collection of content entries (blog posts,
//! projects, packages, bookmarks) into a navigable terminal view. Each
//! component follows the Elm Architecture pattern with `update()` and
//! `view()` methods, so they compose cleanly inside any bubbletea-rs
//! application.
//!
//! ## Components
//!
//! - **[`browse`]**: the composite component. Applies a search query and a
//!   category selection to an entry set, then presents the result through
//!   one of three windowing strategies (show all, paged, load-more).
//! - **[`search`]**: a debounced text input. Keystrokes update a live
//!   buffer; the query is committed only after a quiet period, on explicit
//!   submit, or immediately when cleared.
//! - **[`paginator`]**: 1-indexed pagination state plus a page-range
//!   calculator that centers a window of page numbers around the current
//!   page, pinning the first and last page with ellipses for the gaps.
//! - **[`entry`]**: the [`Entry`](entry::Entry) trait describing what the
//!   filter predicate sees, and [`DefaultEntry`](entry::DefaultEntry) as a
//!   ready-made implementation.
//! - **[`key`]**: type-safe key bindings with help text.
//!
//! ## Filtering rules
//!
//! The filter predicate is deliberately simple: a case-insensitive
//! substring match over an entry's searchable text, combined with exact
//! category equality. The category list is derived from the entries
//! themselves and always starts with an "All" sentinel that matches
//! everything. Any filter change snaps the window back to the start, so a
//! page number never points past the new result set.
//!
//! ## Example
//!
//! ```rust
//! use browse_widgets::prelude::*;
//!
//! let entries = vec![
//!     DefaultEntry::new("Learning REACT Hooks", "A video course")
//!         .with_category("Video"),
//!     DefaultEntry::new("Rust in Action", "Systems programming with Rust")
//!         .with_category("Book"),
//!     DefaultEntry::new("Zola themes", "Static site theming")
//!         .with_category("Article"),
//! ];
//!
//! let mut browse = Browse::new(entries, DisplayMode::Paged, 10, 80)
//!     .with_title("Library");
//! browse.set_query("rust");
//! assert_eq!(browse.filtered_len(), 1);
//! assert_eq!(browse.page(), 1);
//! ```
//!
//! ## Focus management
//!
//! Focusable components implement the [`Component`] trait. Blurring the
//! search input also cancels its pending debounce timer, so a commit can
//! never fire against a view that has moved on.

use bubbletea_rs::Cmd;

pub mod browse;
pub mod entry;
pub mod key;
pub mod paginator;
pub mod search;

/// Common interface for focusable components.
///
/// Standardizes focus handling so applications can manage keyboard routing
/// generically.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::prelude::*;
/// use bubbletea_rs::Cmd;
///
/// fn handle_focus<T: Component>(component: &mut T) {
///     let _cmd: Option<Cmd> = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut search = Search::new();
/// handle_focus(&mut search);
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks such as starting
    /// timers.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    ///
    /// Should clean up focus-related resources such as pending timers.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use browse::Model as Browse;
pub use browse::{BrowseKeyMap, BrowseStyles, DisplayMode, Filter, WindowInfo, ALL_CATEGORIES};
pub use entry::{DefaultEntry, Entry};
pub use key::{matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap};
pub use paginator::Model as Paginator;
pub use paginator::{PageRange, Type as PaginatorType};
pub use search::Model as Search;
pub use search::{DebounceMsg, QueryMsg};

/// Convenient re-exports for the common case.
///
/// ```rust
/// use browse_widgets::prelude::*;
///
/// let browse: Browse<DefaultEntry> = Browse::new(vec![], DisplayMode::All, 10, 80);
/// assert!(browse.is_empty());
/// ```
pub mod prelude {
    pub use crate::browse::Model as Browse;
    pub use crate::browse::{
        BrowseKeyMap, BrowseStyles, DisplayMode, Filter, WindowInfo, ALL_CATEGORIES,
    };
    pub use crate::entry::{DefaultEntry, Entry};
    pub use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::paginator::Model as Paginator;
    pub use crate::paginator::{PageRange, Type as PaginatorType};
    pub use crate::search::Model as Search;
    pub use crate::search::{DebounceMsg, QueryMsg};
    pub use crate::Component;
}
