// src/api/mod.rs

pub mod types;
pub mod describe;

pub use types::{DescribeRequest, DescribeResponse, QueryStatus, UsageError};
pub use describe::{describe, parse_query};
