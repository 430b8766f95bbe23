//! DHT22 temperature/humidity sensor driver (single-wire, bit-banged).
//!
//! Protocol: the host pulls the data line low for >1 ms, releases it,
//! the sensor answers with an 80 us low / 80 us high handshake and then
//! clocks out 40 bits. Each bit starts with a ~50 us low; a short high
//! (~28 us) is a 0, a long high (~70 us) is a 1. The fifth byte is a
//! truncated sum of the first four.
//!
//! The sensor refuses to answer more often than every ~2 s; callers map
//! any error to "keep the cached reading" rather than surfacing it.

use crate::error::Error;
use crate::sensors::env_cache::RawSample;
use defmt::trace;
use embassy_nrf::gpio::{AnyPin, Flex, OutputDrive, Pull};
use embassy_time::{Duration, Instant, Timer};

/// Start-pulse width (ms). DHT22 wants at least 1 ms.
const START_PULSE_MS: u64 = 2;

/// Longest we wait for any single level transition (us).
const EDGE_TIMEOUT_US: u64 = 200;

/// High-pulse width separating a 0 bit from a 1 bit (us).
const BIT_THRESHOLD_US: u64 = 50;

/// DHT22 on a single GPIO.
pub struct Dht22<'d> {
    pin: Flex<'d>,
}

impl<'d> Dht22<'d> {
    pub fn new(pin: AnyPin) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_as_input(Pull::Up);
        Self { pin }
    }

    /// Block until the line reaches `level`, returning how long it took.
    fn wait_for(&mut self, level: bool, timeout_us: u64) -> Result<u64, Error> {
        let start = Instant::now();
        while self.pin.is_high() != level {
            if start.elapsed() > Duration::from_micros(timeout_us) {
                return Err(Error::SensorTimeout);
            }
        }
        Ok(start.elapsed().as_micros())
    }

    /// One full 40-bit transfer.
    ///
    /// Bit timing is tight enough that this must not be preempted; the
    /// read runs between main-loop steps, never concurrently with the
    /// access sequence.
    pub async fn read(&mut self) -> Result<RawSample, Error> {
        // Start pulse, then hand the line back to the sensor.
        self.pin.set_as_output(OutputDrive::Standard);
        self.pin.set_low();
        Timer::after(Duration::from_millis(START_PULSE_MS)).await;
        self.pin.set_as_input(Pull::Up);

        // Handshake: sensor drives low then high, each ~80 us. No
        // answer here means absent or still in its refractory window.
        self.wait_for(false, EDGE_TIMEOUT_US)
            .map_err(|_| Error::SensorNotReady)?;
        self.wait_for(true, EDGE_TIMEOUT_US)?;
        self.wait_for(false, EDGE_TIMEOUT_US)?;

        let mut bytes = [0u8; 5];
        for bit in 0..40 {
            // 50 us low preamble, then the width of the high phase
            // encodes the bit.
            self.wait_for(true, EDGE_TIMEOUT_US)?;
            let high_us = self.wait_for(false, EDGE_TIMEOUT_US)?;
            if high_us > BIT_THRESHOLD_US {
                bytes[bit / 8] |= 1 << (7 - bit % 8);
            }
        }

        let sum = bytes[0]
            .wrapping_add(bytes[1])
            .wrapping_add(bytes[2])
            .wrapping_add(bytes[3]);
        if sum != bytes[4] {
            return Err(Error::SensorChecksum);
        }

        let humidity_tenths = (u16::from(bytes[0]) << 8 | u16::from(bytes[1])) as i16;
        let temp_raw = u16::from(bytes[2]) << 8 | u16::from(bytes[3]);
        // Sign-magnitude: bit 15 marks below zero.
        let temperature_tenths = if temp_raw & 0x8000 != 0 {
            -((temp_raw & 0x7fff) as i16)
        } else {
            temp_raw as i16
        };

        trace!(
            "dht22: t={} rh={} (tenths)",
            temperature_tenths,
            humidity_tenths
        );
        Ok(RawSample {
            temperature_tenths,
            humidity_tenths,
        })
    }
}
