//! Styling for the browse component.
//!
//! All defaults use `AdaptiveColor` so they remain readable in both light
//! and dark terminal themes.

use lipgloss_extras::prelude::*;

/// Unicode bullet character (•) used as a divider between footer segments.
pub const BULLET: &str = "•";

/// Unicode ellipsis character (…) used when truncating entry titles.
pub const ELLIPSIS: &str = "…";

/// Styling configuration for every visual element of a browse view.
#[derive(Debug, Clone)]
pub struct BrowseStyles {
    /// Style for the title bar container.
    pub title_bar: Style,
    /// Style for the browse title text.
    pub title: Style,
    /// Style for the selected category label.
    pub category_active: Style,
    /// Style for unselected category labels.
    pub category_inactive: Style,
    /// Style for an entry's title line.
    pub entry_title: Style,
    /// Style for an entry's description line.
    pub entry_desc: Style,
    /// Style for the "No entries" message.
    pub no_entries: Style,
    /// Style for the status bar.
    pub status_bar: Style,
    /// Style for the status bar when the set is empty.
    pub status_empty: Style,
    /// Style for the pagination area.
    pub pagination_style: Style,
    /// Style for the load-more hint.
    pub load_more_hint: Style,
    /// Style for the divider dot between footer segments.
    pub divider_dot: Style,
}

impl Default for BrowseStyles {
    fn default() -> Self {
        let very_subdued = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            category_active: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            category_inactive: Style::new().foreground(subdued.clone()),
            entry_title: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            entry_desc: Style::new().foreground(subdued.clone()),
            no_entries: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            status_empty: Style::new().foreground(subdued.clone()),
            pagination_style: Style::new().padding_left(2),
            load_more_hint: Style::new().foreground(subdued),
            divider_dot: Style::new()
                .foreground(very_subdued)
                .set_string(&format!(" {} ", BULLET)),
        }
    }
}
