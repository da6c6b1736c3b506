use std::sync::Arc;
use std::time::Duration;

use nbminer_exporter::services::metrics::MetricsRegistry;
use nbminer_exporter::services::miner::MinerClient;
use nbminer_exporter::services::poller::Poller;

use crate::common::fake_miner;

const STATUS_BODY: &str = r#"{
    "stratum": {
        "accepted_shares": 10,
        "invalid_shares": 1,
        "rejected_shares": 2,
        "Latency": 50
    },
    "miner": {
        "total_power_consume": 1200
    }
}"#;

fn poller_for(endpoint: String, metrics: Arc<MetricsRegistry>) -> Poller {
    Poller::new(MinerClient::new(endpoint), metrics, Duration::from_secs(30))
}

#[tokio::test]
async fn successful_poll_sets_all_five_gauges() {
    let metrics = MetricsRegistry::new().unwrap();
    let endpoint = fake_miner(STATUS_BODY).await;

    poller_for(endpoint, metrics.clone()).poll().await;

    assert_eq!(metrics.shares.get(), 10.0);
    assert_eq!(metrics.invalid_shares.get(), 1.0);
    assert_eq!(metrics.rejected_shares.get(), 2.0);
    assert_eq!(metrics.latency.get(), 50.0);
    assert_eq!(metrics.total_power.get(), 1200.0);

    assert_eq!(metrics.polling_errors.get(), 0.0);
    assert_eq!(metrics.parsing_errors.get(), 0.0);
}

#[tokio::test]
async fn unreachable_endpoint_counts_a_polling_error_and_keeps_gauges() {
    let metrics = MetricsRegistry::new().unwrap();

    // Warm the gauges with one good cycle first
    let endpoint = fake_miner(STATUS_BODY).await;
    poller_for(endpoint, metrics.clone()).poll().await;

    // Nothing listens on port 1
    poller_for("http://127.0.0.1:1".to_string(), metrics.clone())
        .poll()
        .await;

    assert_eq!(metrics.polling_errors.get(), 1.0);
    assert_eq!(metrics.parsing_errors.get(), 0.0);

    // Stale-but-present: the previous values survive the failed cycle
    assert_eq!(metrics.shares.get(), 10.0);
    assert_eq!(metrics.invalid_shares.get(), 1.0);
    assert_eq!(metrics.rejected_shares.get(), 2.0);
    assert_eq!(metrics.latency.get(), 50.0);
    assert_eq!(metrics.total_power.get(), 1200.0);
}

#[tokio::test]
async fn malformed_body_counts_a_parsing_error_and_keeps_gauges() {
    let metrics = MetricsRegistry::new().unwrap();
    let endpoint = fake_miner("not json").await;

    poller_for(endpoint, metrics.clone()).poll().await;

    assert_eq!(metrics.parsing_errors.get(), 1.0);
    assert_eq!(metrics.polling_errors.get(), 0.0);

    assert_eq!(metrics.shares.get(), 0.0);
    assert_eq!(metrics.total_power.get(), 0.0);
}

#[tokio::test]
async fn type_mismatch_counts_a_parsing_error() {
    let metrics = MetricsRegistry::new().unwrap();
    let endpoint = fake_miner(r#"{"stratum": {"accepted_shares": "ten"}}"#).await;

    poller_for(endpoint, metrics.clone()).poll().await;

    assert_eq!(metrics.parsing_errors.get(), 1.0);
    assert_eq!(metrics.polling_errors.get(), 0.0);
}

#[tokio::test]
async fn latest_poll_wins_with_no_aggregation() {
    let metrics = MetricsRegistry::new().unwrap();

    let first = fake_miner(STATUS_BODY).await;
    poller_for(first, metrics.clone()).poll().await;

    let second = fake_miner(
        r#"{
            "stratum": {
                "accepted_shares": 25,
                "invalid_shares": 3,
                "rejected_shares": 4,
                "Latency": 80
            },
            "miner": {
                "total_power_consume": 900
            }
        }"#,
    )
    .await;
    poller_for(second, metrics.clone()).poll().await;

    assert_eq!(metrics.shares.get(), 25.0);
    assert_eq!(metrics.invalid_shares.get(), 3.0);
    assert_eq!(metrics.rejected_shares.get(), 4.0);
    assert_eq!(metrics.latency.get(), 80.0);
    assert_eq!(metrics.total_power.get(), 900.0);
}

#[tokio::test]
async fn error_counters_accumulate_across_cycles() {
    let metrics = MetricsRegistry::new().unwrap();
    let poller = poller_for("http://127.0.0.1:1".to_string(), metrics.clone());

    for expected in 1..=3 {
        poller.poll().await;
        assert_eq!(metrics.polling_errors.get(), expected as f64);
    }
}

#[tokio::test]
async fn missing_payload_fields_read_as_zero() {
    let metrics = MetricsRegistry::new().unwrap();
    let endpoint = fake_miner("{}").await;

    poller_for(endpoint, metrics.clone()).poll().await;

    // An empty object decodes; every field defaults to zero
    assert_eq!(metrics.shares.get(), 0.0);
    assert_eq!(metrics.total_power.get(), 0.0);
    assert_eq!(metrics.parsing_errors.get(), 0.0);
    assert_eq!(metrics.polling_errors.get(), 0.0);
}
