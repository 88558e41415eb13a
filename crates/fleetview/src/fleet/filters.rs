use std::collections::HashSet;
use std::hash::Hash;

use contracts::domain::asset::AssetRecord;
use contracts::enums::asset_status::AssetStatus;
use contracts::enums::capability::Capability;

/// Filter group a toggled value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Status,
    Type,
    Location,
    Capability,
}

/// Active checkbox selections across the four filter groups of the fleet
/// list. An empty set imposes no restriction on its group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetFilters {
    pub status: HashSet<AssetStatus>,
    pub type_codes: HashSet<String>,
    pub locations: HashSet<String>,
    pub capabilities: HashSet<Capability>,
}

impl FleetFilters {
    /// Whether the asset passes every active filter group. Status, type
    /// and location are membership checks; every selected capability must
    /// be present on the unit.
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        if !self.status.is_empty() && !self.status.contains(&asset.status) {
            return false;
        }
        if !self.type_codes.is_empty() && !self.type_codes.contains(&asset.type_code) {
            return false;
        }
        if !self.locations.is_empty() && !self.locations.contains(&asset.location) {
            return false;
        }
        self.capabilities
            .iter()
            .all(|capability| asset.has_capability(*capability))
    }

    /// Add the value to its group if absent, remove it if present.
    /// Unrecognized status or capability codes are logged and ignored.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) {
        match category {
            FilterCategory::Status => match AssetStatus::from_code(value) {
                Some(status) => toggle_value(&mut self.status, status),
                None => log::warn!("ignoring unknown status filter value: {}", value),
            },
            FilterCategory::Type => toggle_value(&mut self.type_codes, value.to_string()),
            FilterCategory::Location => toggle_value(&mut self.locations, value.to_string()),
            FilterCategory::Capability => match Capability::from_code(value) {
                Some(capability) => toggle_value(&mut self.capabilities, capability),
                None => log::warn!("ignoring unknown capability filter value: {}", value),
            },
        }
    }

    /// Drop every selection in all four groups
    pub fn clear(&mut self) {
        self.status.clear();
        self.type_codes.clear();
        self.locations.clear();
        self.capabilities.clear();
    }

    /// Number of selected values across all groups, shown on the filter
    /// button badge
    pub fn active_count(&self) -> usize {
        self.status.len() + self.type_codes.len() + self.locations.len() + self.capabilities.len()
    }

    /// Whether no group restricts anything
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn toggle_value<T: Hash + Eq>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
