use std::sync::Arc;
use std::time::Duration;

use nbminer_exporter::config::Config;
use nbminer_exporter::services::metrics::MetricsRegistry;
use nbminer_exporter::services::miner::MinerClient;
use nbminer_exporter::services::poller::Poller;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nbminer_exporter=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    tracing::info!("Host: {}", config.host);
    tracing::info!("Miner: {}", config.miner_endpoint);
    tracing::info!("Polling seconds: {}", config.polling_interval);

    let metrics = MetricsRegistry::new().expect("Failed to initialize metrics registry");

    let client = MinerClient::new(config.miner_endpoint.clone());
    let poller = Arc::new(Poller::new(
        client,
        metrics.clone(),
        Duration::from_secs(config.polling_interval),
    ));

    // Warm the gauges before the scrape server starts answering
    poller.poll().await;

    // Fire off the updater
    let updater = poller.clone();
    tokio::spawn(async move { updater.run().await });

    let app = nbminer_exporter::create_app(metrics);

    let listener = tokio::net::TcpListener::bind(&config.host)
        .await
        .expect("Failed to bind scrape server address");
    tracing::info!("Serving metrics on http://{}/metrics", config.host);
    axum::serve(listener, app).await.unwrap();
}
