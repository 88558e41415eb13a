use crate::fleet::filters::FleetFilters;

#[derive(Clone, Debug)]
pub struct FleetListState {
    pub search_query: String,
    pub filters: FleetFilters,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
}

impl Default for FleetListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            filters: FleetFilters::default(),
            sort_field: "id".to_string(),
            sort_ascending: true,
            page: 1,
        }
    }
}
