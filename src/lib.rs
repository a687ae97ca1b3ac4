pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use config::{CliArgs, ServiceConfig};
pub use crate::core::aggregator::RegionDataAggregator;
pub use domain::model::AggregatedResult;
pub use utils::error::{AggregatorError, Result, ValidationError};
