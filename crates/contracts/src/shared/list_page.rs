use serde::{Deserialize, Serialize};

/// One page of a filtered, sorted listing, as handed to a rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Records visible on the current page
    pub page_items: Vec<T>,
    /// Total records matching the active filters
    pub total_count: usize,
    /// Page count at the page size this page was produced with
    pub total_pages: usize,
    /// 1-based number of the page held in `page_items`
    pub current_page: usize,
}

impl<T> ListPage<T> {
    /// 1-based inclusive bounds of the visible window, for a
    /// "Showing X-Y of Z" summary line. `None` when the page is empty.
    pub fn visible_range(&self, page_size: usize) -> Option<(usize, usize)> {
        if self.page_items.is_empty() || self.current_page == 0 {
            return None;
        }
        let first = (self.current_page - 1) * page_size + 1;
        let last = first + self.page_items.len() - 1;
        Some((first, last))
    }
}
