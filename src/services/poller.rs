use std::sync::Arc;
use std::time::Duration;

use crate::services::metrics::MetricsRegistry;
use crate::services::miner::{MinerClient, MinerError};

/// Runs the fetch-decode-update cycle against the miner status API
pub struct Poller {
    client: MinerClient,
    metrics: Arc<MetricsRegistry>,
    interval: Duration,
}

impl Poller {
    pub fn new(client: MinerClient, metrics: Arc<MetricsRegistry>, interval: Duration) -> Self {
        Self {
            client,
            metrics,
            interval,
        }
    }

    /// One poll cycle. Never fails: both failure kinds are absorbed into
    /// their error counter and the cycle ends with no gauge touched, so the
    /// previous values stay visible on the scrape endpoint.
    pub async fn poll(&self) {
        let status = match self.client.status().await {
            Ok(status) => status,
            Err(MinerError::Polling(e)) => {
                self.metrics.polling_errors.inc();
                tracing::warn!("Polling error: {}", e);
                return;
            }
            Err(MinerError::Parsing(e)) => {
                self.metrics.parsing_errors.inc();
                tracing::warn!("Parsing error: {}", e);
                return;
            }
        };

        let stratum = &status.stratum;

        tracing::debug!("Shares: {}", stratum.accepted_shares);
        tracing::debug!("InvalidShares: {}", stratum.invalid_shares);
        tracing::debug!("RejectedShares: {}", stratum.rejected_shares);
        tracing::debug!("Latency: {}", stratum.latency);
        tracing::debug!("TotalPower: {}", status.miner.total_power_consume);

        self.metrics.shares.set(stratum.accepted_shares as f64);
        self.metrics
            .invalid_shares
            .set(stratum.invalid_shares as f64);
        self.metrics
            .rejected_shares
            .set(stratum.rejected_shares as f64);
        self.metrics.latency.set(stratum.latency as f64);
        self.metrics
            .total_power
            .set(status.miner.total_power_consume as f64);

        tracing::info!("Polled");
    }

    /// Unending repeat loop: suspend for the configured interval, then poll.
    ///
    /// The warm-up poll at startup runs before this task is spawned, so the
    /// observable sequence is always poll, suspend, poll, suspend. The
    /// suspend needs no cleanup guard here because [`Self::poll`] absorbs
    /// every failure internally and cannot exit the loop body early.
    pub async fn run(&self) {
        loop {
            tokio::time::sleep(self.interval).await;
            self.poll().await;
        }
    }
}
