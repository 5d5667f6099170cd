use token_report_aggregator::config::Config;
use token_report_aggregator::server::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    run_server(config).await
}
