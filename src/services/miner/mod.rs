pub mod client;
pub mod schema;

pub use client::{MinerClient, MinerError};
pub use schema::MinerStatus;
