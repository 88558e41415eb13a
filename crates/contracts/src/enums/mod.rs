pub mod asset_status;
pub mod capability;
