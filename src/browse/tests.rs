use super::*;
use crate::entry::{DefaultEntry, Entry};
use crate::Component;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn entry(title: &str, category: &str) -> DefaultEntry {
    DefaultEntry::new(title, "").with_category(category)
}

fn numbered(count: usize) -> Vec<DefaultEntry> {
    (1..=count)
        .map(|i| {
            let cat = if i % 2 == 0 { "Even" } else { "Odd" };
            entry(&format!("Item {}", i), cat)
        })
        .collect()
}

fn key(code: KeyCode) -> bubbletea_rs::Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn test_new_shows_everything() {
    let m = Model::new(numbered(5), DisplayMode::All, 10, 80);
    assert_eq!(m.len(), 5);
    assert_eq!(m.filtered_len(), 5);
    assert_eq!(m.visible_entries().len(), 5);
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
}

#[test]
fn test_paged_last_partial_page() {
    // 23 entries at 10 per page: page 3 holds the trailing 3.
    let mut m = Model::new(numbered(23), DisplayMode::Paged, 10, 80);
    assert_eq!(m.total_pages(), 3);

    m.paginator.go_to(3);
    let visible = m.visible_entries();
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[0].title(), "Item 21");
    assert_eq!(visible[2].title(), "Item 23");
    assert_eq!(m.window().visible, 3);
}

#[test]
fn test_paged_pages_cover_filtered_set_exactly_once() {
    let mut m = Model::new(numbered(23), DisplayMode::Paged, 10, 80);
    let mut seen = Vec::new();
    for page in 1..=m.total_pages() {
        m.paginator.go_to(page);
        for e in m.visible_entries() {
            seen.push(e.title());
        }
    }
    assert_eq!(seen.len(), 23);
    for i in 1..=23 {
        assert!(seen.contains(&format!("Item {}", i)));
    }
}

#[test]
fn test_load_more_grows_monotonically() {
    let mut m = Model::new(numbered(23), DisplayMode::LoadMore, 10, 80);
    assert_eq!(m.visible_entries().len(), 10);
    assert!(m.has_more());

    m.load_more();
    assert_eq!(m.visible_entries().len(), 20);
    assert!(m.has_more());

    m.load_more();
    assert_eq!(m.visible_entries().len(), 23);
    assert!(!m.has_more());

    // Further calls stay pinned at the end.
    m.load_more();
    assert_eq!(m.visible_entries().len(), 23);
}

#[test]
fn test_load_more_on_empty_set() {
    let mut m: Model<DefaultEntry> = Model::new(Vec::new(), DisplayMode::LoadMore, 10, 80);
    assert!(m.visible_entries().is_empty());
    assert!(!m.has_more());
    assert_eq!(m.total_pages(), 1);
    m.load_more();
    assert!(m.visible_entries().is_empty());
}

#[test]
fn test_query_is_case_insensitive() {
    let mut m = Model::new(
        vec![
            entry("Learning REACT Hooks", "Video"),
            entry("Rust in Action", "Book"),
        ],
        DisplayMode::All,
        10,
        80,
    );
    m.set_query("react");
    assert_eq!(m.filtered_len(), 1);
    assert_eq!(m.visible_entries()[0].title(), "Learning REACT Hooks");
}

#[test]
fn test_query_no_match_yields_empty_window() {
    let mut m = Model::new(numbered(5), DisplayMode::Paged, 10, 80);
    m.set_query("zzz");
    assert_eq!(m.filtered_len(), 0);
    assert!(m.visible_entries().is_empty());
    assert_eq!(m.total_pages(), 1);
}

#[test]
fn test_categories_derived_in_first_appearance_order() {
    let m = Model::new(
        vec![
            entry("a", "Video"),
            entry("b", "Book"),
            entry("c", "Video"),
            entry("d", "Article"),
        ],
        DisplayMode::All,
        10,
        80,
    );
    assert_eq!(m.categories(), &["All", "Video", "Book", "Article"]);
}

#[test]
fn test_set_category_filters_entries() {
    let mut m = Model::new(
        vec![entry("a", "Video"), entry("b", "Book"), entry("c", "Video")],
        DisplayMode::All,
        10,
        80,
    );
    m.set_category("Video");
    assert_eq!(m.filtered_len(), 2);
    m.set_category("Book");
    assert_eq!(m.filtered_len(), 1);
    m.set_category(ALL_CATEGORIES);
    assert_eq!(m.filtered_len(), 3);
}

#[test]
fn test_set_category_rejects_unknown() {
    let mut m = Model::new(vec![entry("a", "Video")], DisplayMode::All, 10, 80);
    m.set_category("Podcast");
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
    assert_eq!(m.filtered_len(), 1);
}

#[test]
fn test_query_and_category_combine() {
    let mut m = Model::new(
        vec![
            entry("Rust basics", "Video"),
            entry("Rust patterns", "Book"),
            entry("Go basics", "Video"),
        ],
        DisplayMode::All,
        10,
        80,
    );
    m.set_query("rust");
    m.set_category("Video");
    assert_eq!(m.filtered_len(), 1);
    assert_eq!(m.visible_entries()[0].title(), "Rust basics");
}

#[test]
fn test_filter_change_resets_page() {
    // Deep in the paged set, a category change must snap back to page 1.
    let mut m = Model::new(numbered(60), DisplayMode::Paged, 10, 80);
    m.paginator.go_to(4);
    assert_eq!(m.page(), 4);

    m.set_category("Even");
    assert_eq!(m.page(), 1);
    assert_eq!(m.filtered_len(), 30);
}

#[test]
fn test_filter_change_resets_visible_count() {
    let mut m = Model::new(numbered(60), DisplayMode::LoadMore, 10, 80);
    m.load_more();
    m.load_more();
    assert_eq!(m.visible_entries().len(), 30);

    m.set_query("Item 1");
    // "Item 1" and "Item 10".."Item 19" match: 11 entries, back to one page.
    assert_eq!(m.filtered_len(), 11);
    assert_eq!(m.visible_entries().len(), 10);
    assert!(m.has_more());
}

#[test]
fn test_clear_filter_restores_full_set() {
    let mut m = Model::new(numbered(10), DisplayMode::All, 10, 80);
    m.set_query("Item 3");
    m.set_category("Odd");
    assert_eq!(m.filtered_len(), 1);

    m.clear_filter();
    assert_eq!(m.filtered_len(), 10);
    assert_eq!(m.query(), "");
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
}

#[test]
fn test_set_entries_rederives_categories() {
    let mut m = Model::new(vec![entry("a", "Video")], DisplayMode::All, 10, 80);
    m.set_category("Video");

    m.set_entries(vec![entry("b", "Book")]);
    // "Video" vanished with the old set, so the selection falls back.
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
    assert_eq!(m.categories(), &["All", "Book"]);
    assert_eq!(m.filtered_len(), 1);
}

#[test]
fn test_category_cycling_wraps() {
    let mut m = Model::new(
        vec![entry("a", "Video"), entry("b", "Book")],
        DisplayMode::All,
        10,
        80,
    );
    m.next_category();
    assert_eq!(m.selected_category(), "Video");
    m.next_category();
    assert_eq!(m.selected_category(), "Book");
    m.next_category();
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
    m.prev_category();
    assert_eq!(m.selected_category(), "Book");
}

#[test]
fn test_entries_without_category_only_under_all() {
    let mut m = Model::new(
        vec![
            DefaultEntry::new("untagged", ""),
            entry("tagged", "Video"),
        ],
        DisplayMode::All,
        10,
        80,
    );
    assert_eq!(m.filtered_len(), 2);
    m.set_category("Video");
    assert_eq!(m.filtered_len(), 1);
    assert_eq!(m.visible_entries()[0].title(), "tagged");
}

#[test]
fn test_update_cycles_category_on_tab() {
    let mut m = Model::new(
        vec![entry("a", "Video"), entry("b", "Book")],
        DisplayMode::All,
        10,
        80,
    );
    m.update(&key(KeyCode::Tab));
    assert_eq!(m.selected_category(), "Video");
}

#[test]
fn test_update_loads_more_on_space() {
    let mut m = Model::new(numbered(23), DisplayMode::LoadMore, 10, 80);
    m.update(&key(KeyCode::Char(' ')));
    assert_eq!(m.visible_entries().len(), 20);
}

#[test]
fn test_update_focuses_search_on_slash() {
    let mut m = Model::new(numbered(3), DisplayMode::All, 10, 80);
    assert!(!m.search().focused());
    m.update(&key(KeyCode::Char('/')));
    assert!(m.search().focused());

    // Focused search swallows keys instead of cycling categories.
    m.update(&key(KeyCode::Tab));
    assert_eq!(m.selected_category(), ALL_CATEGORIES);
}

#[test]
fn test_update_applies_committed_query() {
    let mut m = Model::new(numbered(23), DisplayMode::Paged, 10, 80);
    m.paginator.go_to(3);

    let msg: bubbletea_rs::Msg = Box::new(crate::search::QueryMsg {
        id: m.search().id(),
        query: String::from("Item 2"),
    });
    m.update(&msg);
    // "Item 2", "Item 20".."Item 23" match.
    assert_eq!(m.filtered_len(), 5);
    assert_eq!(m.page(), 1);
}

#[test]
fn test_update_ignores_query_for_other_input() {
    let mut m = Model::new(numbered(5), DisplayMode::All, 10, 80);
    let msg: bubbletea_rs::Msg = Box::new(crate::search::QueryMsg {
        id: m.search().id() + 1,
        query: String::from("nope"),
    });
    m.update(&msg);
    assert_eq!(m.filtered_len(), 5);
}

#[test]
fn test_update_forwards_page_keys_to_paginator() {
    let mut m = Model::new(numbered(23), DisplayMode::Paged, 10, 80);
    m.update(&key(KeyCode::Right));
    assert_eq!(m.page(), 2);
    m.update(&key(KeyCode::Left));
    assert_eq!(m.page(), 1);
}

#[test]
fn test_view_renders_entries_and_status() {
    let m = Model::new(numbered(3), DisplayMode::All, 10, 80).with_title("Library");
    let view = m.view();
    assert!(view.contains("Library"));
    assert!(view.contains("Item 1"));
    assert!(view.contains("3/3 items"));
}

#[test]
fn test_view_empty_set() {
    let m: Model<DefaultEntry> = Model::new(Vec::new(), DisplayMode::All, 10, 80);
    let view = m.view();
    assert!(view.contains("No entries."));
}

#[test]
fn test_view_load_more_hint() {
    let m = Model::new(numbered(23), DisplayMode::LoadMore, 10, 80);
    let view = m.view();
    assert!(view.contains("13 more"));
    assert!(view.contains("press space/m to load"));
}

#[test]
fn test_view_load_more_hint_follows_rebinding() {
    let mut m = Model::new(numbered(23), DisplayMode::LoadMore, 10, 80);
    m.keymap.load_more = crate::key::new_binding(vec![
        crate::key::with_keys_str(&["n"]),
        crate::key::with_help("n", "load more"),
    ]);
    assert!(m.view().contains("press n to load"));
}

#[test]
fn test_view_shows_search_input_while_focused() {
    let mut m = Model::new(numbered(3), DisplayMode::All, 10, 80).with_title("Library");
    m.search_mut().placeholder = String::from("type to search");
    m.update(&key(KeyCode::Char('/')));

    let view = m.view();
    assert!(view.contains("type to search"));
    assert!(!view.contains("Library"));
}

#[test]
fn test_status_bar_singular_noun() {
    let mut m = Model::new(vec![entry("solo", "Video")], DisplayMode::All, 10, 80);
    m.set_status_bar_item_name("repo", "repos");
    assert!(m.view().contains("1/1 repo"));
}
