//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, calibration values
//! and the reference access code live here so they can be tuned in one
//! place.

// Access code

/// Number of digits in the access code.
pub const CODE_LEN: usize = 4;

/// Reference access code, compared byte-wise against the entered code.
///
/// Stored in plain text on purpose - secure storage is out of scope for
/// this controller.
pub const REFERENCE_CODE: [u8; CODE_LEN] = *b"1234";

/// Highest value the digit counter can reach.
pub const DIGIT_MAX: u8 = 9;

// Joystick

/// Joystick sample period (ms). The sampler task keeps this cadence even
/// while an access sequence is blocking the main loop.
pub const AXIS_SAMPLE_PERIOD_MS: u64 = 100;

/// Calibrated centre of the X axis after scaling the raw read to 0..=100.
pub const AXIS_CENTER: i16 = 74;

/// Dead zone half-width: normalized values with |v| at or below this
/// collapse to 0 to suppress jitter.
pub const AXIS_DEAD_ZONE: i16 = 2;

/// Axis deflection that triggers code verification. Strictly greater-than:
/// an axis value of exactly this does NOT trigger.
pub const AXIS_TRIGGER_THRESHOLD: i16 = 50;

// Main loop

/// Main control loop period (ms). Also the effective button debounce
/// window - a held button repeats once per iteration.
pub const LOOP_PERIOD_MS: u64 = 1000;

// Melody and buzzer

/// Unlock melody, played ascending on grant and reversed on re-lock.
pub const MELODY_HZ: [f32; 4] = [659.26, 440.00, 392.00, 493.88];

/// How long each melody tone sounds (ms).
pub const TONE_SOUND_MS: u64 = 500;

/// Silence between melody tones (ms).
pub const TONE_QUIET_MS: u64 = 200;

/// Error buzz frequency (Hz). Matches a 3830 us PWM period.
pub const ERROR_TONE_HZ: f32 = 261.1;

/// Error buzz on/off time (ms), repeated twice.
pub const ERROR_TONE_MS: u64 = 200;

/// PWM duty cycle while a tone sounds.
pub const TONE_DUTY: f32 = 0.5;

// Latch motor

/// Motor drive speed during open/close, fraction of full scale.
pub const LATCH_SPEED: f32 = 0.3;

/// How long the motor runs to open or close the latch (ms).
pub const LATCH_TRAVEL_MS: u64 = 1500;

/// Dwell time the door stays open before auto-closing (ms).
pub const DWELL_MS: u64 = 30_000;

/// Cooldown after a rejected code (ms).
pub const DENY_COOLDOWN_MS: u64 = 3_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick X     → P0.02 (AIN0)
//   Button INC     → P0.11
//   Button SAVE    → P0.12
//   Button DEC     → P0.24
//   DHT22 data     → P0.04
//   Motor PWM      → P0.13
//   Motor DIR      → P0.14
//   Buzzer PWM     → P0.15
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
