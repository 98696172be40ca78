//! View rendering for the browse component.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::model::Model;
use super::style::ELLIPSIS;
use super::types::DisplayMode;
use crate::entry::Entry;
use crate::Component;

/// Truncates `text` to at most `width` terminal cells, appending an
/// ellipsis when anything is cut. Widths are measured per grapheme cell
/// so wide characters count double.
fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    // Not even room for the ellipsis itself.
    if width < UnicodeWidthStr::width(ELLIPSIS) {
        return String::new();
    }
    let budget = width - UnicodeWidthStr::width(ELLIPSIS);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

impl<I: Entry> Model<I> {
    /// Renders the full browse view: header, category row, entries and
    /// footer joined by newlines.
    pub fn view(&self) -> String {
        let mut sections = Vec::with_capacity(4);
        sections.push(self.view_header());
        if self.categories.len() > 1 {
            sections.push(self.view_categories());
        }
        sections.push(self.view_entries());
        sections.push(self.view_footer());
        sections.join("\n")
    }

    /// Header line: the search input while it is focused, otherwise the
    /// styled title.
    fn view_header(&self) -> String {
        let inner = if self.search.focused() {
            self.search.view()
        } else {
            self.styles.title.render(&self.title)
        };
        self.styles.title_bar.render(&inner)
    }

    /// One line listing every category, the selected one highlighted.
    fn view_categories(&self) -> String {
        let rendered: Vec<String> = self
            .categories
            .iter()
            .map(|c| {
                if *c == self.filter.category {
                    self.styles.category_active.render(c)
                } else {
                    self.styles.category_inactive.render(c)
                }
            })
            .collect();
        rendered.join(&self.styles.divider_dot.render(""))
    }

    /// The visible entries, two lines each, or a placeholder when nothing
    /// passes the filter.
    fn view_entries(&self) -> String {
        let visible = self.visible_entries();
        if visible.is_empty() {
            return self.styles.no_entries.render("No entries.");
        }

        let mut lines = Vec::with_capacity(visible.len() * 2);
        for entry in visible {
            let title = truncate(&entry.title(), self.width);
            lines.push(self.styles.entry_title.render(&title));
            let desc = entry.description();
            if !desc.is_empty() {
                lines.push(self.styles.entry_desc.render(&truncate(&desc, self.width)));
            }
        }
        lines.join("\n")
    }

    /// Footer: the status bar plus the mode-specific navigation hint, the
    /// pagination buttons in paged mode or the load-more hint when more
    /// entries remain.
    fn view_footer(&self) -> String {
        let mut parts = Vec::with_capacity(2);

        if self.show_status_bar {
            parts.push(self.view_status_bar());
        }

        match self.mode {
            DisplayMode::Paged => {
                if self.paginator.total_pages > 1 {
                    parts.push(self.styles.pagination_style.render(&self.paginator.view()));
                }
            }
            DisplayMode::LoadMore => {
                if self.has_more() {
                    let remaining = self.filtered_len() - self.window().visible;
                    let hint = format!(
                        "{} more, press {} to load",
                        remaining, self.keymap.load_more.help.key
                    );
                    parts.push(self.styles.load_more_hint.render(&hint));
                }
            }
            DisplayMode::All => {}
        }

        parts.join("\n")
    }

    /// Status bar text such as "12/48 items" (visible over filtered).
    fn view_status_bar(&self) -> String {
        let info = self.window();
        if info.filtered == 0 {
            let empty = if self.filter.is_empty() {
                format!("No {}", self.status_item_name(0))
            } else if self.filter.query.is_empty() {
                format!("Nothing in {}", self.filter.category)
            } else {
                format!("Nothing matched: {}", self.filter.query)
            };
            return self.styles.status_empty.render(&empty);
        }

        let noun = self.status_item_name(info.filtered);
        let mut status = format!("{}/{} {}", info.visible, info.filtered, noun);
        if self.mode == DisplayMode::Paged && info.total_pages > 1 {
            status.push_str(&format!(
                " {} page {}/{}",
                super::style::BULLET,
                self.page(),
                info.total_pages
            ));
        }
        self.styles.status_bar.render(&status)
    }
}
