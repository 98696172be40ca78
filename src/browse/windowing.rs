//! Window computation for the three display modes.

use super::model::Model;
use super::types::{DisplayMode, WindowInfo};
use crate::entry::Entry;

impl<I: Entry> Model<I> {
    /// Returns the filtered entries visible under the active display mode.
    ///
    /// In `All` mode this is the whole filtered set. In `Paged` mode it is
    /// the slice for the current page. In `LoadMore` mode it is a prefix of
    /// the filtered set, growing as [`load_more`](Self::load_more) is
    /// called. An empty filtered set yields an empty slice in every mode.
    pub fn visible_entries(&self) -> Vec<&I> {
        let indices: &[usize] = match self.mode {
            DisplayMode::All => &self.filtered,
            DisplayMode::Paged => {
                let (start, end) = self.paginator.get_slice_bounds(self.filtered.len());
                &self.filtered[start..end]
            }
            DisplayMode::LoadMore => {
                let end = self.visible_count.min(self.filtered.len());
                &self.filtered[..end]
            }
        };
        indices.iter().map(|&i| &self.entries[i]).collect()
    }

    /// Summarizes the current window: how many entries are visible, how
    /// many passed the filter, whether more can be revealed, and the page
    /// count.
    pub fn window(&self) -> WindowInfo {
        let filtered = self.filtered.len();
        let visible = match self.mode {
            DisplayMode::All => filtered,
            DisplayMode::Paged => self.paginator.items_on_page(filtered),
            DisplayMode::LoadMore => self.visible_count.min(filtered),
        };
        WindowInfo {
            visible,
            filtered,
            has_more: self.has_more(),
            total_pages: self.total_pages(),
        }
    }

    /// Whether further entries remain beyond the current window.
    ///
    /// Only meaningful in load-more mode; the other modes expose their
    /// remainder through pagination or not at all.
    pub fn has_more(&self) -> bool {
        match self.mode {
            DisplayMode::LoadMore => self.visible_count < self.filtered.len(),
            _ => false,
        }
    }

    /// Reveals one more page worth of entries in load-more mode. The
    /// visible count never exceeds the filtered length, so repeated calls
    /// at the end are no-ops. Ignored in the other modes.
    pub fn load_more(&mut self) {
        if self.mode != DisplayMode::LoadMore {
            return;
        }
        self.visible_count = (self.visible_count + self.per_page).min(self.filtered.len());
    }
}
