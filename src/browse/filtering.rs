//! Filter predicate and category derivation.

use super::model::Model;
use super::types::{Filter, ALL_CATEGORIES};
use crate::entry::Entry;

/// Returns true when `entry` passes `filter`.
///
/// Both conditions must hold: the lowercased search value contains the
/// lowercased query (an empty query matches everything), and the entry's
/// filter label equals the selected category unless "All" is selected.
/// Entries without a label only appear under "All".
pub fn matches<I: Entry>(entry: &I, filter: &Filter) -> bool {
    if !filter.query.is_empty() {
        let haystack = entry.search_value().to_lowercase();
        if !haystack.contains(&filter.query.to_lowercase()) {
            return false;
        }
    }

    if filter.category != ALL_CATEGORIES {
        match entry.filter_label() {
            Some(label) => label == filter.category,
            None => return false,
        }
    } else {
        true
    }
}

/// Derives the category list for a set of entries.
///
/// The list always begins with the "All" sentinel, followed by each
/// distinct filter label in order of first appearance. Duplicate labels
/// are collapsed; entries without a label contribute nothing.
pub fn extract_categories<I: Entry>(entries: &[I]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for entry in entries {
        if let Some(label) = entry.filter_label() {
            if !categories.contains(&label) {
                categories.push(label);
            }
        }
    }
    categories
}

impl<I: Entry> Model<I> {
    /// Recomputes the filtered index set from the active filter and resets
    /// the window to the start. Any filter change routes through here, so
    /// a stale page or grown visible count never survives a new result set.
    pub(super) fn apply_filter(&mut self) {
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| matches(*e, &self.filter))
            .map(|(i, _)| i)
            .collect();

        self.paginator.set_total_items(self.filtered.len());
        self.reset_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DefaultEntry;

    #[test]
    fn test_matches_is_pure() {
        let entry = DefaultEntry::new("Learning REACT Hooks", "A video course")
            .with_category("Video");
        let filter = Filter {
            query: "react".to_string(),
            category: "Video".to_string(),
        };
        // Same inputs, same answer, no matter how often it runs.
        for _ in 0..3 {
            assert!(matches(&entry, &filter));
        }
    }

    #[test]
    fn test_matches_requires_both_conditions() {
        let entry = DefaultEntry::new("Rust in Action", "Systems programming")
            .with_category("Book");
        let query_miss = Filter {
            query: "python".to_string(),
            category: "Book".to_string(),
        };
        let category_miss = Filter {
            query: "rust".to_string(),
            category: "Video".to_string(),
        };
        assert!(!matches(&entry, &query_miss));
        assert!(!matches(&entry, &category_miss));
    }

    #[test]
    fn test_matches_searches_author_and_description() {
        let entry = DefaultEntry::new("Untitled", "terminal apps").with_author("Grace");
        let by_author = Filter {
            query: "grace".to_string(),
            ..Filter::default()
        };
        let by_desc = Filter {
            query: "TERMINAL".to_string(),
            ..Filter::default()
        };
        assert!(matches(&entry, &by_author));
        assert!(matches(&entry, &by_desc));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let entry = DefaultEntry::new("a", "b").with_category("Video");
        let filter = Filter {
            query: String::new(),
            category: "video".to_string(),
        };
        assert!(!matches(&entry, &filter));
    }

    #[test]
    fn test_extract_categories_empty_set() {
        let entries: Vec<DefaultEntry> = Vec::new();
        assert_eq!(extract_categories(&entries), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_extract_categories_dedupes_in_order() {
        let entries = vec![
            DefaultEntry::new("a", "").with_category("Video"),
            DefaultEntry::new("b", "").with_tags(vec!["tooling"]),
            DefaultEntry::new("c", "").with_category("Video"),
            DefaultEntry::new("d", ""),
        ];
        assert_eq!(extract_categories(&entries), vec!["All", "Video", "tooling"]);
    }
}
