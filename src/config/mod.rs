//! Harvest configuration: types and builder.

mod builder;
mod types;

pub use builder::{HarvestConfigBuilder, WithDatasetDir};
pub use types::HarvestConfig;
