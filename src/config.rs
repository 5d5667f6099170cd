use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 3000;

/// Everything the pipeline needs, passed in explicitly at construction.
/// Providers never read ambient process state, so the whole pipeline runs
/// against fakes in tests.
#[derive(Clone, Debug)]
pub struct Config {
    pub solscan_api_key: String,
    pub birdeye_api_key: String,
    pub fetch_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let solscan_api_key =
            env::var("SOLSCAN_API_KEY").context("SOLSCAN_API_KEY must be set")?;
        let birdeye_api_key =
            env::var("BIRDEYE_API_KEY").context("BIRDEYE_API_KEY must be set")?;

        let fetch_timeout = env::var("PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            solscan_api_key,
            birdeye_api_key,
            fetch_timeout,
            port,
        })
    }
}
