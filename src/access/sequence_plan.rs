//! Code verification and the fixed actuation plans.
//!
//! The sequencer itself is a small state machine: the main loop sits in
//! `Idle` until the joystick gesture moves it to `Triggered`, verification
//! picks the `Granting` or `Denying` branch, the branch's step plan runs
//! to completion, and entry state resets on the way back to `Idle`.
//!
//! Plans are plain data so the whole branch - tone order, durations,
//! motor directions - is checkable on the host; the embedded runner in
//! `sequencer.rs` just walks the steps.

use crate::config::{
    CODE_LEN, DENY_COOLDOWN_MS, DWELL_MS, ERROR_TONE_HZ, ERROR_TONE_MS, LATCH_SPEED,
    LATCH_TRAVEL_MS, MELODY_HZ, TONE_QUIET_MS, TONE_SOUND_MS,
};

/// Latch state shown on the display.
///
/// Starts `Locked`; set `Unlocked` on a granted sequence. The close step
/// at the end of the grant branch does not flip this back - that matches
/// the deployed behavior this controller replaces (see DESIGN.md).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Outcome of comparing the entered code against the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// One step of an actuation plan.
///
/// Durations are milliseconds; speeds are fractions of full scale and
/// get clamped by the motor facade.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceStep {
    /// Sound the buzzer at `freq_hz`, then stay quiet.
    Tone {
        freq_hz: f32,
        sound_ms: u64,
        quiet_ms: u64,
    },
    /// Run the latch motor in the opening direction, then stop.
    DriveOpen { speed: f32, ms: u64 },
    /// Run the latch motor in the closing direction, then stop.
    DriveClose { speed: f32, ms: u64 },
    /// Do nothing for the given time.
    Hold { ms: u64 },
}

/// Byte-wise compare over all positions of the entered code.
///
/// Unfilled slots hold 0 and can never match an ASCII digit, so a short
/// entry is always denied.
pub fn verify_code(reference: &[u8; CODE_LEN], entered: &[u8; CODE_LEN]) -> AccessDecision {
    for i in 0..CODE_LEN {
        if reference[i] != entered[i] {
            return AccessDecision::Denied;
        }
    }
    AccessDecision::Granted
}

/// Number of steps in the grant plan: two 4-tone melodies, two motor
/// moves, one dwell.
pub const GRANT_STEPS: usize = 2 * MELODY_HZ.len() + 3;

/// Number of steps in the deny plan: two error buzzes plus the cooldown.
pub const DENY_STEPS: usize = 3;

/// The grant branch: ascending melody, open, dwell, descending melody,
/// close.
pub fn grant_steps() -> [SequenceStep; GRANT_STEPS] {
    let tone = |freq_hz| SequenceStep::Tone {
        freq_hz,
        sound_ms: TONE_SOUND_MS,
        quiet_ms: TONE_QUIET_MS,
    };
    [
        tone(MELODY_HZ[0]),
        tone(MELODY_HZ[1]),
        tone(MELODY_HZ[2]),
        tone(MELODY_HZ[3]),
        SequenceStep::DriveOpen {
            speed: LATCH_SPEED,
            ms: LATCH_TRAVEL_MS,
        },
        SequenceStep::Hold { ms: DWELL_MS },
        tone(MELODY_HZ[3]),
        tone(MELODY_HZ[2]),
        tone(MELODY_HZ[1]),
        tone(MELODY_HZ[0]),
        SequenceStep::DriveClose {
            speed: LATCH_SPEED,
            ms: LATCH_TRAVEL_MS,
        },
    ]
}

/// The deny branch: two flat buzzes and a cooldown hold.
pub fn deny_steps() -> [SequenceStep; DENY_STEPS] {
    let buzz = SequenceStep::Tone {
        freq_hz: ERROR_TONE_HZ,
        sound_ms: ERROR_TONE_MS,
        quiet_ms: ERROR_TONE_MS,
    };
    [buzz, buzz, SequenceStep::Hold { ms: DENY_COOLDOWN_MS }]
}

/// Total wall-clock time a plan takes (ms).
pub fn plan_duration_ms(steps: &[SequenceStep]) -> u64 {
    steps
        .iter()
        .map(|s| match *s {
            SequenceStep::Tone {
                sound_ms, quiet_ms, ..
            } => sound_ms + quiet_ms,
            SequenceStep::DriveOpen { ms, .. } | SequenceStep::DriveClose { ms, .. } => ms,
            SequenceStep::Hold { ms } => ms,
        })
        .sum()
}
