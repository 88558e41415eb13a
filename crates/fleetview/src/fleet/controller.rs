//! Owns the asset collection and view state for one fleet list, and
//! recomputes the visible page synchronously after every mutation.

use contracts::domain::asset::AssetRecord;

use crate::fleet::filters::FilterCategory;
use crate::fleet::pipeline::{FleetPage, FleetPipeline};
use crate::fleet::state::FleetListState;
use crate::fleet::stats::FleetStats;

pub struct FleetController {
    assets: Vec<AssetRecord>,
    pipeline: FleetPipeline,
    state: FleetListState,
    current: FleetPage,
}

impl FleetController {
    /// Controller over an injected collection with the default page size
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self::with_pipeline(assets, FleetPipeline::default())
    }

    /// Controller with a custom pipeline configuration
    pub fn with_pipeline(assets: Vec<AssetRecord>, pipeline: FleetPipeline) -> Self {
        let state = FleetListState::default();
        let current = pipeline.run(&assets, &state);
        Self {
            assets,
            pipeline,
            state,
            current,
        }
    }

    /// The page computed from the latest state
    pub fn page(&self) -> &FleetPage {
        &self.current
    }

    /// Current view state snapshot
    pub fn state(&self) -> &FleetListState {
        &self.state
    }

    /// The full injected collection, unfiltered
    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    /// Status and alert tallies over the full collection
    pub fn stats(&self) -> FleetStats {
        FleetStats::collect(&self.assets)
    }

    /// Replace the search text and start over from page 1
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.page = 1;
        self.refresh();
    }

    /// Toggle one filter value and start over from page 1
    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str) {
        self.state.filters.toggle(category, value);
        self.state.page = 1;
        self.refresh();
    }

    /// Drop every filter selection and start over from page 1
    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.page = 1;
        self.refresh();
    }

    /// Sort by the field, flipping direction when it is already active.
    /// Keeps the current page.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.state.sort_field == field {
            self.state.sort_ascending = !self.state.sort_ascending;
        } else {
            self.state.sort_field = field.to_string();
            self.state.sort_ascending = true;
        }
        self.refresh();
    }

    /// Jump to the given 1-based page; values past the end are clamped
    /// to the last page
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.current = self.pipeline.run(&self.assets, &self.state);
        // keep the state in step with the page the pipeline settled on
        self.state.page = self.current.current_page;
        log::debug!(
            "fleet view refreshed: {} of {} assets match, page {} of {}",
            self.current.total_count,
            self.assets.len(),
            self.current.current_page,
            self.current.total_pages
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::asset_status::AssetStatus;

    fn asset(id: &str, type_code: &str, status: AssetStatus, utilization: u32) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            type_name: "Gorilla Spike Puller".to_string(),
            type_code: type_code.to_string(),
            status,
            location: "UP Denver Region".to_string(),
            mile_marker: "MP 112.3".to_string(),
            operator: Some("J. Alvarez".to_string()),
            utilization,
            cycles_today: 900,
            engine_hours: 2000,
            fuel_level: 60,
            has_lidar: false,
            has_camera: false,
            has_auto_brake: false,
            alert_count: 0,
            last_update: "5 min ago".to_string(),
            next_service: "Mar 20".to_string(),
        }
    }

    fn fleet(count: usize) -> Vec<AssetRecord> {
        (1..=count)
            .map(|i| {
                let status = if i % 7 == 0 {
                    AssetStatus::Down
                } else {
                    AssetStatus::Active
                };
                asset(
                    &format!("GSP-{:04}", 800 + i),
                    "GSP",
                    status,
                    (30 + i * 2) as u32,
                )
            })
            .collect()
    }

    fn visible_ids(controller: &FleetController) -> Vec<String> {
        controller
            .page()
            .page_items
            .iter()
            .map(|a| a.id.clone())
            .collect()
    }

    #[test]
    fn test_starts_on_page_one_sorted_by_id() {
        let controller = FleetController::new(fleet(23));
        assert_eq!(controller.state().sort_field, "id");
        assert!(controller.state().sort_ascending);
        assert_eq!(controller.page().current_page, 1);
        assert_eq!(controller.page().total_count, 23);
        assert_eq!(controller.page().page_items[0].id, "GSP-0801");
    }

    #[test]
    fn test_search_change_resets_to_page_one() {
        let mut controller = FleetController::new(fleet(23));
        controller.set_page(3);
        assert_eq!(controller.state().page, 3);

        controller.set_search_query("gsp");
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.page().current_page, 1);
    }

    #[test]
    fn test_filter_toggle_resets_to_page_one() {
        let mut controller = FleetController::new(fleet(23));
        controller.set_page(2);

        controller.toggle_filter(FilterCategory::Status, "active");
        assert_eq!(controller.state().page, 1);
    }

    #[test]
    fn test_clear_filters_resets_to_page_one() {
        let mut controller = FleetController::new(fleet(23));
        controller.toggle_filter(FilterCategory::Status, "active");
        controller.set_page(2);

        controller.clear_filters();
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.page().total_count, 23);
    }

    #[test]
    fn test_sort_toggle_keeps_the_page() {
        let mut controller = FleetController::new(fleet(23));
        controller.set_page(2);

        controller.toggle_sort("utilization");
        assert_eq!(controller.state().page, 2);
    }

    #[test]
    fn test_repeated_sort_toggle_flips_direction() {
        let mut controller =
            FleetController::with_pipeline(fleet(8), FleetPipeline::new(20));

        controller.toggle_sort("utilization");
        assert!(controller.state().sort_ascending);
        let first = visible_ids(&controller);

        controller.toggle_sort("utilization");
        assert!(!controller.state().sort_ascending);
        let mut reversed = visible_ids(&controller);
        reversed.reverse();
        assert_eq!(first, reversed);

        controller.toggle_sort("utilization");
        assert!(controller.state().sort_ascending);
        assert_eq!(visible_ids(&controller), first);
    }

    #[test]
    fn test_sorting_a_new_field_starts_ascending() {
        let mut controller = FleetController::new(fleet(8));
        controller.toggle_sort("utilization");
        controller.toggle_sort("utilization");
        assert!(!controller.state().sort_ascending);

        controller.toggle_sort("status");
        assert_eq!(controller.state().sort_field, "status");
        assert!(controller.state().sort_ascending);
    }

    #[test]
    fn test_clearing_filters_leaves_the_search_applied() {
        let mut controller = FleetController::new(fleet(23));
        controller.set_search_query("0807");
        // GSP-0807 is down, so the active filter hides it entirely.
        controller.toggle_filter(FilterCategory::Status, "active");
        controller.toggle_filter(FilterCategory::Type, "GSP");
        assert_eq!(controller.page().total_count, 0);

        controller.clear_filters();
        assert_eq!(controller.page().total_count, 1);
        assert_eq!(controller.page().page_items[0].id, "GSP-0807");
    }

    #[test]
    fn test_mutations_are_visible_to_the_next_read() {
        let mut controller = FleetController::new(fleet(23));
        controller.toggle_filter(FilterCategory::Status, "down");

        // 23 units, every seventh is down: 0807, 0814, 0821.
        assert_eq!(
            visible_ids(&controller),
            vec!["GSP-0807", "GSP-0814", "GSP-0821"]
        );
    }

    #[test]
    fn test_set_page_past_the_end_lands_on_the_last_page() {
        let mut controller = FleetController::new(fleet(23));
        controller.set_page(9);
        assert_eq!(controller.state().page, 3);
        assert_eq!(controller.page().current_page, 3);
        assert_eq!(controller.page().page_items.len(), 3);
    }

    #[test]
    fn test_stats_cover_the_full_collection() {
        let controller = FleetController::new(fleet(23));
        let stats = controller.stats();
        assert_eq!(stats.total, 23);
        assert_eq!(stats.down, 3);
        assert_eq!(stats.active, 20);
    }
}
