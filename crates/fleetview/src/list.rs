//! Shared utilities for list views: search, sorting, pagination math.

use std::cmp::Ordering;

use contracts::shared::field_value::FieldValue;

/// A record a free-text search can match against
pub trait Searchable {
    /// Whether the record matches the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// A record orderable by a named field
pub trait Sortable {
    /// Compare two records by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Filter a list by a search query. An empty query keeps every item;
/// anything else is matched literally, untrimmed.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    items.into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort a list by the given field. `sort_by` is stable, so records that
/// compare equal keep their incoming relative order.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Compare two field values. Text compares case-insensitively; values of
/// different shapes compare equal.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
        (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Resolved pagination window over a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Effective 1-based page after clamping
    pub page: usize,
    /// Total page count, 0 for an empty set
    pub total_pages: usize,
    /// Slice start, inclusive
    pub start: usize,
    /// Slice end, exclusive
    pub end: usize,
}

/// Compute the pagination window for `total` records at `page_size` per
/// page. The requested page is clamped into `[1, max(total_pages, 1)]`,
/// so a result set that shrank below the requested page lands on its last
/// page instead of past the end. A zero page size is treated as 1.
pub fn page_bounds(total: usize, requested_page: usize, page_size: usize) -> PageBounds {
    let page_size = page_size.max(1);
    let total_pages = if total == 0 { 0 } else { (total + page_size - 1) / page_size };
    let page = requested_page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    PageBounds { page, total_pages, start, end }
}

/// Page numbers for a pagination strip: at most five buttons, anchored to
/// either end of the range and centered on the current page in between
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let count = total_pages.min(5);
    (0..count)
        .map(|i| {
            if total_pages <= 5 {
                i + 1
            } else if current_page <= 3 {
                i + 1
            } else if current_page >= total_pages - 2 {
                total_pages - 4 + i
            } else {
                current_page - 2 + i
            }
        })
        .collect()
}
