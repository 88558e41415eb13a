use std::cmp::Ordering;

use contracts::domain::asset::AssetRecord;
use contracts::shared::list_page::ListPage;

use crate::fleet::state::FleetListState;
use crate::list::{compare_values, filter_list, page_bounds, sort_list, Searchable, Sortable};

/// Records shown per page of the fleet list
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of fleet assets ready for a rendering layer
pub type FleetPage = ListPage<AssetRecord>;

impl Searchable for AssetRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_query(filter)
    }
}

/// Key-based ordering over asset fields. Keys unknown to `field_value`
/// compare equal, so the incoming order is preserved for them.
impl Sortable for AssetRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (self.field_value(field), other.field_value(field)) {
            (Some(a), Some(b)) => compare_values(&a, &b),
            _ => Ordering::Equal,
        }
    }
}

/// Stateless executor mapping (collection, view state) to the visible
/// page: search, then category filters, then a stable sort, then the
/// pagination slice. Holds only the configured page size.
#[derive(Debug, Clone)]
pub struct FleetPipeline {
    page_size: usize,
}

impl Default for FleetPipeline {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FleetPipeline {
    /// Pipeline with a custom page size, floored at 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Compute the page for the given state. Pure: same collection and
    /// state always produce the same page.
    pub fn run(&self, assets: &[AssetRecord], state: &FleetListState) -> FleetPage {
        let source = assets.to_vec();

        let searched = filter_list(source, &state.search_query);
        let mut filtered: Vec<AssetRecord> = searched
            .into_iter()
            .filter(|asset| state.filters.matches(asset))
            .collect();

        if let Some(first) = filtered.first() {
            if first.field_value(&state.sort_field).is_none() {
                log::debug!("unknown sort field {}, keeping source order", state.sort_field);
            }
        }
        sort_list(&mut filtered, &state.sort_field, state.sort_ascending);

        let total = filtered.len();
        let bounds = page_bounds(total, state.page, self.page_size);
        let page_items = filtered[bounds.start..bounds.end].to_vec();

        FleetPage {
            page_items,
            total_count: total,
            total_pages: bounds.total_pages,
            current_page: bounds.page,
        }
    }
}
