//! Last-good cache for temperature/humidity readings.
//!
//! DHT22 reads fail transiently (the sensor only answers every couple of
//! seconds); the cache keeps the previous reading on display rather than
//! flashing an error sentinel.

/// One calibrated environment reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvReading {
    /// Degrees Celsius, one decimal of real resolution.
    pub temperature_c: f32,
    /// Relative humidity percent, one decimal of real resolution.
    pub humidity_pct: f32,
}

/// Raw sensor output in tenths, as the DHT22 reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub temperature_tenths: i16,
    pub humidity_tenths: i16,
}

/// Holds the most recent successful reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvCache {
    reading: EnvReading,
}

impl Default for EnvCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCache {
    /// Cache showing 0.0/0.0 until the first successful sample lands.
    pub const fn new() -> Self {
        Self {
            reading: EnvReading {
                temperature_c: 0.0,
                humidity_pct: 0.0,
            },
        }
    }

    /// Fold in the outcome of one sampling attempt.
    ///
    /// `Some` overwrites both fields together; `None` (sensor not ready
    /// or transfer failed) leaves the cache untouched. There is no
    /// partial update.
    pub fn update(&mut self, sample: Option<RawSample>) {
        if let Some(s) = sample {
            self.reading = EnvReading {
                temperature_c: s.temperature_tenths as f32 / 10.0,
                humidity_pct: s.humidity_tenths as f32 / 10.0,
            };
        }
    }

    /// The last good reading.
    pub fn reading(&self) -> EnvReading {
        self.reading
    }
}
