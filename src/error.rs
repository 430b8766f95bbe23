//! Unified error type for codelatch.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! There are no fatal errors in this firmware: every variant is handled
//! by keeping the previous state and retrying on a later loop iteration.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    /// The DHT22 did not answer the start pulse - either absent or
    /// still inside its ~2 s refractory window.
    SensorNotReady,

    /// The DHT22 stalled mid-transfer.
    SensorTimeout,

    /// The DHT22 transfer failed its checksum.
    SensorChecksum,
}
