use serde::Deserialize;

/// Top-level payload served by NBMiner at /api/v1/status
///
/// Every field defaults to its zero value when absent and unknown keys are
/// ignored, matching how the miner's API behaves across versions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MinerStatus {
    pub reboot_times: i64,
    pub start_time: i64,
    pub stratum: Stratum,
    pub miner: MinerSummary,
}

/// Pool-side statistics for the stratum connection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stratum {
    pub accepted_shares: i64,
    pub invalid_shares: i64,
    pub rejected_shares: i64,
    // The status API capitalises this one key
    #[serde(rename = "Latency")]
    pub latency: i64,
    pub pool_hashrate_10m: String,
    pub pool_hashrate_4h: String,
    pub pool_hashrate_24h: String,
}

/// Rig-wide totals plus the per-device breakdown
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MinerSummary {
    pub devices: Vec<Device>,
    pub total_hashrate: String,
    pub total_hashrate2: String,
    pub total_hashrate_raw: f64,
    pub total_hashrate2_raw: f64,
    pub total_power_consume: i64,
}

/// A single GPU as reported by the miner. Decoded in full but only the
/// rig-wide totals feed the exported metrics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: i64,
    pub pci_bus_id: i64,
    pub accepted_shares: i64,
    pub invalid_shares: i64,
    pub rejected_shares: i64,
    pub hashrate: String,
    pub hashrate2: String,
    pub hashrate_raw: f64,
    pub hashrate2_raw: f64,
    pub core_clock: i64,
    pub core_utilization: i64,
    pub mem_clock: i64,
    pub mem_utilization: i64,
    pub fan: i64,
    pub power: i64,
    pub temperature: i64,
}
