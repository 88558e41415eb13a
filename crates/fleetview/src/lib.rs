pub mod fleet;
pub mod list;
