use clap::Parser;

/// Startup configuration
/// Parsed from the command line, fixed for the process lifetime
#[derive(Debug, Parser)]
#[command(version, about = "Prometheus exporter for the NBMiner status API")]
pub struct Config {
    /// Host and port to bind to for which prometheus polls
    #[arg(long, default_value = "0.0.0.0:2112")]
    pub host: String,

    /// The host and port where nbminer is exporting, {VALUE}/api/v1/status
    #[arg(long = "minter", default_value = "http://localhost:22333")]
    pub miner_endpoint: String,

    /// The number of seconds to sleep between polling intervals
    #[arg(long = "polling_interval", default_value_t = 30)]
    pub polling_interval: u64,
}

impl Config {
    pub fn load() -> Result<Self, String> {
        Self::parse().validate()
    }

    fn validate(self) -> Result<Self, String> {
        if self.polling_interval == 0 {
            return Err("polling_interval must be at least 1 second".to_string());
        }
        Ok(self)
    }
}
