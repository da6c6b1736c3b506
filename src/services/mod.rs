pub mod metrics;
pub mod miner;
pub mod poller;
