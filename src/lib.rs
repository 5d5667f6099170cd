// src/lib.rs

pub mod types;
pub mod config;
pub mod providers;
pub mod normalize;
pub mod metrics;
pub mod report;
pub mod api;
pub mod server;

// Re-export commonly used types
pub use types::*;
pub use config::Config;
pub use providers::TokenDataProvider;
pub use normalize::{merge, scale_supply};
pub use metrics::{compute, Metrics};
pub use report::{compose, Report};
pub use api::{describe, parse_query, DescribeResponse, QueryStatus, UsageError};
