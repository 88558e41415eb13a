//! Feed ingestion: asset records are parsed and validated here, at the
//! data-source boundary, so the pipeline itself never sees a malformed
//! record.

use std::collections::HashSet;

use thiserror::Error;

use contracts::domain::asset::AssetRecord;

/// Failure while ingesting an asset feed
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse asset feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid asset record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("duplicate asset id {0}")]
    DuplicateId(String),
}

/// Parse a JSON asset feed and validate every record. The collection
/// keeps the feed's order, which later serves as the tie-break order for
/// equal sort keys.
pub fn assets_from_json(json: &str) -> Result<Vec<AssetRecord>, DatasetError> {
    let assets: Vec<AssetRecord> = serde_json::from_str(json)?;
    validate_assets(&assets)?;
    log::debug!("loaded {} fleet assets", assets.len());
    Ok(assets)
}

/// Check an already-parsed collection: every record must pass its shape
/// checks and ids must be unique.
pub fn validate_assets(assets: &[AssetRecord]) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for asset in assets {
        asset
            .validate()
            .map_err(|reason| DatasetError::InvalidRecord {
                id: asset.id.clone(),
                reason,
            })?;
        if !seen.insert(asset.id.as_str()) {
            return Err(DatasetError::DuplicateId(asset.id.clone()));
        }
    }
    Ok(())
}
