use contracts::domain::asset::AssetRecord;
use contracts::enums::asset_status::AssetStatus;

/// Restrictions applied by an asset picker: free text plus at most one
/// status and one equipment class. `None` leaves a field unrestricted.
#[derive(Debug, Clone, Default)]
pub struct LookupQuery {
    pub query: String,
    pub status: Option<AssetStatus>,
    pub type_code: Option<String>,
}

impl LookupQuery {
    /// Whether the asset passes the picker restrictions
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        if !self.query.is_empty() && !asset.matches_query(&self.query) {
            return false;
        }
        if let Some(status) = self.status {
            if asset.status != status {
                return false;
            }
        }
        if let Some(type_code) = &self.type_code {
            if &asset.type_code != type_code {
                return false;
            }
        }
        true
    }
}

/// Assets matching the picker restrictions, in collection order
pub fn lookup<'a>(assets: &'a [AssetRecord], query: &LookupQuery) -> Vec<&'a AssetRecord> {
    assets.iter().filter(|asset| query.matches(asset)).collect()
}
