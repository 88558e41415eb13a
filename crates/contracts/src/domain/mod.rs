pub mod asset;
pub mod equipment;
