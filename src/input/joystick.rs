//! Joystick X-axis sampler task.
//!
//! Samples the SAADC every 100 ms, scales the conversion to 0..=100 and
//! publishes the normalized, dead-zone-filtered position to a shared
//! atomic. The task is timer-driven and keeps its cadence while the main
//! loop blocks inside an access sequence, so the axis value never goes
//! stale.

use crate::config::AXIS_SAMPLE_PERIOD_MS;
use crate::input::axis_logic::normalize_axis;
use core::sync::atomic::{AtomicI16, Ordering};
use defmt::trace;
use embassy_nrf::saadc::Saadc;
use embassy_time::{Duration, Timer};

/// Full-scale SAADC conversion (12-bit single-ended).
const ADC_FULL_SCALE: i32 = 4095;

/// Shared axis position. Single writer (this task), read once per
/// main-loop iteration; a machine-word atomic is all the locking needed.
static AXIS: AtomicI16 = AtomicI16::new(0);

/// Latest normalized axis position, 0 when centred.
pub fn axis_position() -> i16 {
    AXIS.load(Ordering::Relaxed)
}

#[embassy_executor::task]
pub async fn sampler_task(mut saadc: Saadc<'static, 1>) {
    loop {
        let mut buf = [0i16; 1];
        saadc.sample(&mut buf).await;

        let raw = i32::from(buf[0]).clamp(0, ADC_FULL_SCALE);
        let percent = (raw * 100 / ADC_FULL_SCALE) as i16;
        let axis = normalize_axis(percent);
        trace!("axis: raw={} pos={}", raw, axis);
        AXIS.store(axis, Ordering::Relaxed);

        Timer::after(Duration::from_millis(AXIS_SAMPLE_PERIOD_MS)).await;
    }
}
