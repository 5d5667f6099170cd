use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ActionLink;

/// Malformed invocation from the command surface. Surfaced verbatim to the
/// caller, never a crash.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("usage: provide exactly one token address or pair address")]
    MissingQuery,
    #[error("expected exactly one identifier, got {0}")]
    TooManyIdentifiers(usize),
}

#[derive(Clone, Debug, Deserialize)]
pub struct DescribeRequest {
    /// Raw argument list as the command surface received it.
    pub args: Vec<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    NotFound,
}

/// The tuple handed to the delivery sink: rendered text plus action links.
/// The sink owns transport and retries; partial provider data never leaves
/// the pipeline.
#[derive(Clone, Debug, Serialize)]
pub struct DescribeResponse {
    pub status: QueryStatus,
    pub query: String,
    pub report_text: String,
    pub action_links: Vec<ActionLink>,
}
