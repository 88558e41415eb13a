use std::collections::BTreeMap;

use serde::Serialize;

use contracts::domain::asset::AssetRecord;
use contracts::enums::asset_status::AssetStatus;

/// Status and alert tallies shown in the stat strip above the fleet list.
/// Always computed over the full collection, not the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub idle: usize,
    pub down: usize,
    pub with_alerts: usize,
}

impl FleetStats {
    /// Tally the collection in a single pass
    pub fn collect(assets: &[AssetRecord]) -> Self {
        let mut stats = FleetStats {
            total: assets.len(),
            ..FleetStats::default()
        };
        for asset in assets {
            match asset.status {
                AssetStatus::Active => stats.active += 1,
                AssetStatus::Idle => stats.idle += 1,
                AssetStatus::Down => stats.down += 1,
            }
            if asset.alert_count > 0 {
                stats.with_alerts += 1;
            }
        }
        stats
    }
}

/// Record counts per equipment class code, for the per-class badges in
/// the filter panel
pub fn type_counts(assets: &[AssetRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for asset in assets {
        *counts.entry(asset.type_code.clone()).or_insert(0) += 1;
    }
    counts
}
