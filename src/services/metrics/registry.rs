use prometheus::{Counter, Encoder, Gauge, Registry, TextEncoder};
use std::sync::Arc;

/// Central metrics registry for the exporter
///
/// Owns every instrument the scrape endpoint serves. Constructed once at
/// startup and shared between the poller (writer) and the scrape handler
/// (reader).
pub struct MetricsRegistry {
    registry: Registry,

    // Poll cycle health
    pub polling_errors: Counter,
    pub parsing_errors: Counter,

    // Stratum share counts
    pub shares: Gauge,
    pub invalid_shares: Gauge,
    pub rejected_shares: Gauge,

    // Stratum latency and total power draw
    pub latency: Gauge,
    pub total_power: Gauge,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let polling_errors = Counter::new(
            "polling_errors",
            "How many errors we've had polling nbminer",
        )?;
        registry.register(Box::new(polling_errors.clone()))?;

        let parsing_errors = Counter::new(
            "parsing_errors",
            "How many errors we've had parsing nbminer response",
        )?;
        registry.register(Box::new(parsing_errors.clone()))?;

        let shares = Gauge::new("shares", "Total number of shares processed")?;
        registry.register(Box::new(shares.clone()))?;

        let invalid_shares = Gauge::new("invalid_shares", "Invalid shares processed")?;
        registry.register(Box::new(invalid_shares.clone()))?;

        let rejected_shares = Gauge::new("rejected_shares", "Rejected shares processed")?;
        registry.register(Box::new(rejected_shares.clone()))?;

        let latency = Gauge::new("latency", "Latency of publishing")?;
        registry.register(Box::new(latency.clone()))?;

        let total_power = Gauge::new("total_power", "Total power in watts")?;
        registry.register(Box::new(total_power.clone()))?;

        Ok(Arc::new(Self {
            registry,
            polling_errors,
            parsing_errors,
            shares,
            invalid_shares,
            rejected_shares,
            latency,
            total_power,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
