//! Environment sensing - DHT22 driver plus the last-good reading cache.

pub mod dht22;
pub mod env_cache;
