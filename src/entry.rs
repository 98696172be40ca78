//! Content entries: the unit of data that browse components display.
//!
//! An [`Entry`] is a blog post, a project, or any other content unit with a
//! title, a description, an optional author, and optional category/tag
//! labels. The browse model only ever sees the canonical accessors on this
//! trait; normalizing whatever shape a data layer returns (string vs.
//! object authors, missing categories) is the caller's job and happens once,
//! when constructing entries.

use std::fmt::Display;

/// Trait for items that can be displayed, searched, and categorized.
///
/// The derived methods [`search_value`](Entry::search_value) and
/// [`filter_label`](Entry::filter_label) define exactly what the filter
/// predicate sees; override them only if the defaults don't fit.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::entry::Entry;
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Post {
///     title: String,
///     summary: String,
/// }
///
/// impl Display for Post {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.title)
///     }
/// }
///
/// impl Entry for Post {
///     fn title(&self) -> String {
///         self.title.clone()
///     }
///     fn description(&self) -> String {
///         self.summary.clone()
///     }
/// }
/// ```
pub trait Entry: Display + Clone {
    /// The entry's title.
    fn title(&self) -> String;

    /// The entry's description or summary text.
    fn description(&self) -> String;

    /// The author's display name, if the entry carries one.
    fn author(&self) -> Option<String> {
        None
    }

    /// The entry's primary category label, if any.
    fn category(&self) -> Option<String> {
        None
    }

    /// Tag labels attached to the entry.
    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    /// All text the search predicate matches against.
    ///
    /// Defaults to title, description, and author name joined by spaces.
    fn search_value(&self) -> String {
        match self.author() {
            Some(author) => format!("{} {} {}", self.title(), self.description(), author),
            None => format!("{} {}", self.title(), self.description()),
        }
    }

    /// The label used for category filtering.
    ///
    /// The primary category when present; otherwise the first tag. Entries
    /// with neither are only reachable through the "All" sentinel.
    fn filter_label(&self) -> Option<String> {
        self.category().or_else(|| self.tags().into_iter().next())
    }
}

/// A ready-to-use [`Entry`] with title, description, author, category, and
/// tags.
///
/// This is the canonical shape to normalize external data into before
/// handing it to a browse model.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::entry::{DefaultEntry, Entry};
///
/// let post = DefaultEntry::new("Learning REACT Hooks", "A gentle introduction")
///     .with_author("Ada")
///     .with_category("Frontend")
///     .with_tags(vec!["react", "hooks"]);
///
/// assert_eq!(post.filter_label().as_deref(), Some("Frontend"));
/// assert!(post.search_value().contains("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    title: String,
    description: String,
    author: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
}

impl DefaultEntry {
    /// Creates an entry from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: None,
            category: None,
            tags: Vec::new(),
        }
    }

    /// Sets the author's display name (builder pattern).
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the primary category (builder pattern).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the tag labels (builder pattern).
    pub fn with_tags<T: Into<String>>(mut self, tags: Vec<T>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl Display for DefaultEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Entry for DefaultEntry {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn author(&self) -> Option<String> {
        self.author.clone()
    }

    fn category(&self) -> Option<String> {
        self.category.clone()
    }

    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}
