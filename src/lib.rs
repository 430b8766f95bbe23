//! Test-only library interface for codelatch.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;

// Internal module paths for the actual implementations
#[path = "access/entry.rs"]
mod access_entry_impl;
#[path = "access/sequence_plan.rs"]
mod access_plan_impl;
#[path = "input/axis_logic.rs"]
mod input_axis_impl;
#[path = "sensors/env_cache.rs"]
mod env_cache_impl;

pub mod access {
    pub mod entry {
        pub use crate::access_entry_impl::*;
    }
    pub mod sequence_plan {
        pub use crate::access_plan_impl::*;
    }

    pub use entry::CodeEntry;
    pub use sequence_plan::{
        deny_steps, grant_steps, plan_duration_ms, verify_code, AccessDecision, LockState,
        SequenceStep,
    };
}

pub mod input {
    pub mod axis_logic {
        pub use crate::input_axis_impl::*;
    }

    pub use axis_logic::{exceeds_trigger, normalize_axis};
}

pub mod sensors {
    pub mod env_cache {
        pub use crate::env_cache_impl::*;
    }

    pub use env_cache::{EnvCache, EnvReading, RawSample};
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::access::*;
    use super::config::*;
    use super::input::*;
    use super::sensors::*;

    // ════════════════════════════════════════════════════════════════════════
    // Code Entry Accumulator Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn entry_starts_cleared() {
        let entry = CodeEntry::new();
        assert_eq!(entry.digit(), 0);
        assert_eq!(entry.index(), 0);
        assert_eq!(entry.entered(), &[0; CODE_LEN]);
        assert!(entry.text().is_empty());
    }

    #[test]
    fn entry_increment_steps_by_one() {
        let mut entry = CodeEntry::new();
        entry.increment();
        assert_eq!(entry.digit(), 1);
        entry.increment();
        assert_eq!(entry.digit(), 2);
    }

    #[test]
    fn entry_increment_saturates_at_nine() {
        let mut entry = CodeEntry::new();
        for _ in 0..20 {
            entry.increment();
        }
        assert_eq!(entry.digit(), 9);
    }

    #[test]
    fn entry_decrement_saturates_at_zero() {
        let mut entry = CodeEntry::new();
        entry.decrement();
        assert_eq!(entry.digit(), 0);

        entry.increment();
        entry.decrement();
        entry.decrement();
        assert_eq!(entry.digit(), 0);
    }

    #[test]
    fn entry_digit_always_in_bounds_under_mixed_presses() {
        // Pseudo-random press sequence; counter must never leave 0..=9
        // and must move by exactly one per accepted press.
        let mut entry = CodeEntry::new();
        let mut seed = 0x2545_F491u32;
        for _ in 0..1000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let before = entry.digit();
            if seed & 1 == 0 {
                entry.increment();
                assert!(entry.digit() == before + 1 || (before == 9 && entry.digit() == 9));
            } else {
                entry.decrement();
                assert!(before == entry.digit() + 1 || (before == 0 && entry.digit() == 0));
            }
            assert!(entry.digit() <= 9);
        }
    }

    #[test]
    fn entry_save_commits_ascii_digit() {
        let mut entry = CodeEntry::new();
        entry.increment();
        entry.increment();
        entry.increment();
        entry.save();
        assert_eq!(entry.index(), 1);
        assert_eq!(entry.entered()[0], b'3');
        assert_eq!(entry.text(), b"3");
    }

    #[test]
    fn entry_save_saturates_at_code_len() {
        let mut entry = CodeEntry::new();
        entry.increment(); // digit = 1
        for _ in 0..CODE_LEN {
            entry.save();
        }
        assert_eq!(entry.index(), CODE_LEN);
        let filled = *entry.entered();

        // Further saves are no-ops, even after changing the digit.
        entry.increment();
        entry.save();
        assert_eq!(entry.index(), CODE_LEN);
        assert_eq!(entry.entered(), &filled);
    }

    #[test]
    fn entry_text_renders_as_str() {
        // The firmware shows the entered code via str::from_utf8 over
        // text(); the filled prefix must always be valid ASCII digits.
        let mut entry = CodeEntry::new();
        for d in [1u8, 0, 9] {
            while entry.digit() < d {
                entry.increment();
            }
            while entry.digit() > d {
                entry.decrement();
            }
            entry.save();
        }
        assert_eq!(core::str::from_utf8(entry.text()), Ok("109"));
    }

    #[test]
    fn entry_reset_clears_everything() {
        let mut entry = CodeEntry::new();
        entry.increment();
        entry.save();
        entry.increment();
        entry.reset();
        assert_eq!(entry.digit(), 0);
        assert_eq!(entry.index(), 0);
        assert_eq!(entry.entered(), &[0; CODE_LEN]);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Axis Normalization Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn axis_centre_reads_zero() {
        assert_eq!(normalize_axis(AXIS_CENTER), 0);
    }

    #[test]
    fn axis_dead_zone_collapses_to_exactly_zero() {
        for raw in (AXIS_CENTER - AXIS_DEAD_ZONE)..=(AXIS_CENTER + AXIS_DEAD_ZONE) {
            assert_eq!(normalize_axis(raw), 0, "raw={raw}");
        }
    }

    #[test]
    fn axis_just_outside_dead_zone_passes_through() {
        assert_eq!(
            normalize_axis(AXIS_CENTER - AXIS_DEAD_ZONE - 1),
            AXIS_DEAD_ZONE + 1
        );
        assert_eq!(
            normalize_axis(AXIS_CENTER + AXIS_DEAD_ZONE + 1),
            -(AXIS_DEAD_ZONE + 1)
        );
    }

    #[test]
    fn axis_full_deflection() {
        assert_eq!(normalize_axis(0), AXIS_CENTER);
        assert_eq!(normalize_axis(100), AXIS_CENTER - 100);
    }

    #[test]
    fn trigger_threshold_is_strictly_greater_than() {
        assert!(!exceeds_trigger(AXIS_TRIGGER_THRESHOLD));
        assert!(exceeds_trigger(AXIS_TRIGGER_THRESHOLD + 1));
        assert!(!exceeds_trigger(0));
        assert!(!exceeds_trigger(-100));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Environment Cache Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn env_cache_starts_at_zero() {
        let cache = EnvCache::new();
        assert_eq!(cache.reading().temperature_c, 0.0);
        assert_eq!(cache.reading().humidity_pct, 0.0);
    }

    #[test]
    fn env_cache_successful_sample_updates_both_fields() {
        let mut cache = EnvCache::new();
        cache.update(Some(RawSample {
            temperature_tenths: 235,
            humidity_tenths: 417,
        }));
        assert_eq!(cache.reading().temperature_c, 23.5);
        assert_eq!(cache.reading().humidity_pct, 41.7);
    }

    #[test]
    fn env_cache_failed_sample_leaves_reading_untouched() {
        let mut cache = EnvCache::new();
        cache.update(Some(RawSample {
            temperature_tenths: -15,
            humidity_tenths: 889,
        }));
        let before = cache.reading();

        cache.update(None);
        assert_eq!(cache.reading(), before);
    }

    #[test]
    fn env_cache_negative_temperature() {
        let mut cache = EnvCache::new();
        cache.update(Some(RawSample {
            temperature_tenths: -103,
            humidity_tenths: 550,
        }));
        assert_eq!(cache.reading().temperature_c, -10.3);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Code Verification Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn verify_matching_code_grants() {
        assert_eq!(
            verify_code(&REFERENCE_CODE, b"1234"),
            AccessDecision::Granted
        );
    }

    #[test]
    fn verify_any_single_differing_digit_denies() {
        for pos in 0..CODE_LEN {
            let mut entered = REFERENCE_CODE;
            entered[pos] = b'9';
            assert_eq!(
                verify_code(&REFERENCE_CODE, &entered),
                AccessDecision::Denied,
                "pos={pos}"
            );
        }
    }

    #[test]
    fn verify_empty_entry_denies() {
        // Unset slots are 0, never an ASCII digit.
        assert_eq!(
            verify_code(&REFERENCE_CODE, &[0; CODE_LEN]),
            AccessDecision::Denied
        );
    }

    #[test]
    fn verify_partial_entry_denies() {
        let mut entry = CodeEntry::new();
        entry.increment();
        entry.save(); // "1" only
        assert_eq!(
            verify_code(&REFERENCE_CODE, entry.entered()),
            AccessDecision::Denied
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Sequence Plan Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn grant_plan_shape() {
        let steps = grant_steps();
        assert_eq!(steps.len(), 11);

        // Ascending melody first.
        for (i, &freq) in MELODY_HZ.iter().enumerate() {
            match steps[i] {
                SequenceStep::Tone {
                    freq_hz,
                    sound_ms,
                    quiet_ms,
                } => {
                    assert_eq!(freq_hz, freq);
                    assert_eq!(sound_ms, TONE_SOUND_MS);
                    assert_eq!(quiet_ms, TONE_QUIET_MS);
                }
                other => panic!("expected tone at {i}, got {other:?}"),
            }
        }

        assert_eq!(
            steps[4],
            SequenceStep::DriveOpen {
                speed: LATCH_SPEED,
                ms: LATCH_TRAVEL_MS
            }
        );
        assert_eq!(steps[5], SequenceStep::Hold { ms: DWELL_MS });

        // Descending melody mirrors the ascent.
        for (i, &freq) in MELODY_HZ.iter().rev().enumerate() {
            match steps[6 + i] {
                SequenceStep::Tone { freq_hz, .. } => assert_eq!(freq_hz, freq),
                other => panic!("expected tone at {}, got {other:?}", 6 + i),
            }
        }

        assert_eq!(
            steps[10],
            SequenceStep::DriveClose {
                speed: LATCH_SPEED,
                ms: LATCH_TRAVEL_MS
            }
        );
    }

    #[test]
    fn deny_plan_shape() {
        let steps = deny_steps();
        assert_eq!(steps.len(), 3);
        for step in &steps[..2] {
            match *step {
                SequenceStep::Tone {
                    freq_hz,
                    sound_ms,
                    quiet_ms,
                } => {
                    assert_eq!(freq_hz, ERROR_TONE_HZ);
                    assert_eq!(sound_ms, ERROR_TONE_MS);
                    assert_eq!(quiet_ms, ERROR_TONE_MS);
                }
                other => panic!("expected buzz, got {other:?}"),
            }
        }
        assert_eq!(steps[2], SequenceStep::Hold { ms: DENY_COOLDOWN_MS });
    }

    #[test]
    fn grant_plan_total_duration() {
        // 8 tones at 700 ms, two motor moves at 1.5 s, 30 s dwell.
        assert_eq!(plan_duration_ms(&grant_steps()), 38_600);
    }

    #[test]
    fn deny_plan_total_duration() {
        // Two 400 ms buzz cycles plus the 3 s cooldown.
        assert_eq!(plan_duration_ms(&deny_steps()), 3_800);
    }
}
