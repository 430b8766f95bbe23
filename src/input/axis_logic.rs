//! Joystick axis normalization.
//!
//! The sampler task reads the raw X axis, scales it to 0..=100 and feeds
//! it through these pure helpers before publishing the shared value.

use crate::config::{AXIS_CENTER, AXIS_DEAD_ZONE, AXIS_TRIGGER_THRESHOLD};

/// Normalize a scaled axis read (0..=100) around the calibrated centre
/// and apply the dead zone.
///
/// Values within `AXIS_DEAD_ZONE` of centre collapse to exactly 0 so a
/// resting stick never registers as a gesture.
pub fn normalize_axis(raw_percent: i16) -> i16 {
    let v = AXIS_CENTER - raw_percent;
    if v.abs() <= AXIS_DEAD_ZONE {
        0
    } else {
        v
    }
}

/// Whether a normalized axis value counts as the submit gesture.
///
/// Strictly greater-than: a deflection of exactly the threshold does not
/// trigger.
pub fn exceeds_trigger(axis: i16) -> bool {
    axis > AXIS_TRIGGER_THRESHOLD
}
