pub mod controller;
pub mod dataset;
pub mod filters;
pub mod lookup;
pub mod pipeline;
pub mod state;
pub mod stats;
