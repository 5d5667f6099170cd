use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{describe, parse_query, DescribeRequest, DescribeResponse};
use crate::config::Config;
use crate::providers::{BirdeyeProvider, DexscreenerProvider, SolscanProvider, TokenDataProvider};

pub struct AppState {
    pub providers: Vec<Arc<dyn TokenDataProvider>>,
    pub fetch_timeout: std::time::Duration,
}

/// Provider-priority order, declared once: Solscan is authoritative for
/// metadata and holders, Dexscreener for market aggregates, Birdeye fills
/// whatever is still unknown.
pub fn provider_stack(config: &Config) -> Vec<Arc<dyn TokenDataProvider>> {
    vec![
        Arc::new(SolscanProvider::new(
            config.solscan_api_key.clone(),
            config.fetch_timeout,
        )),
        Arc::new(DexscreenerProvider::new(config.fetch_timeout)),
        Arc::new(BirdeyeProvider::new(
            config.birdeye_api_key.clone(),
            config.fetch_timeout,
        )),
    ]
}

pub async fn describe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, (StatusCode, String)> {
    let query = parse_query(&request.args)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    tracing::info!(query, "describe request");

    Ok(Json(
        describe(query, &state.providers, state.fetch_timeout).await,
    ))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        providers: provider_stack(&config),
        fetch_timeout: config.fetch_timeout,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/v1/describe", post(describe_handler))
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
