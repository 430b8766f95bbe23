//! Integration tests for codelatch host-testable logic.
//!
//! Walks the full code-entry round trip the way the firmware's main
//! loop does: button presses accumulate digits, a joystick gesture
//! submits, verification picks a branch, and entry state resets.

use codelatch::access::{deny_steps, grant_steps, verify_code, AccessDecision, CodeEntry};
use codelatch::config::{AXIS_CENTER, CODE_LEN, REFERENCE_CODE};
use codelatch::input::{exceeds_trigger, normalize_axis};
use codelatch::sensors::{EnvCache, RawSample};

/// Set the counter to `digit` and save, as a user would per slot.
fn punch_in(entry: &mut CodeEntry, digit: u8) {
    while entry.digit() < digit {
        entry.increment();
    }
    while entry.digit() > digit {
        entry.decrement();
    }
    entry.save();
}

#[test]
fn entering_reference_code_grants() {
    let mut entry = CodeEntry::new();
    for d in [1, 2, 3, 4] {
        punch_in(&mut entry, d);
    }

    // Full joystick deflection submits.
    let axis = normalize_axis(0);
    assert_eq!(axis, AXIS_CENTER);
    assert!(exceeds_trigger(axis));

    assert_eq!(
        verify_code(&REFERENCE_CODE, entry.entered()),
        AccessDecision::Granted
    );
    assert!(!grant_steps().is_empty());
}

#[test]
fn one_wrong_digit_denies() {
    let mut entry = CodeEntry::new();
    for d in [1, 2, 3, 5] {
        punch_in(&mut entry, d);
    }

    assert_eq!(
        verify_code(&REFERENCE_CODE, entry.entered()),
        AccessDecision::Denied
    );
    assert!(!deny_steps().is_empty());
}

#[test]
fn entry_resets_after_either_branch() {
    for code in [[1u8, 2, 3, 4], [9, 9, 9, 9]] {
        let mut entry = CodeEntry::new();
        for d in code {
            punch_in(&mut entry, d);
        }
        let _ = verify_code(&REFERENCE_CODE, entry.entered());

        // Both branches end the same way in the main loop.
        entry.reset();
        assert_eq!(entry.digit(), 0);
        assert_eq!(entry.index(), 0);
        assert_eq!(entry.entered(), &[0; CODE_LEN]);
    }
}

#[test]
fn environment_cache_survives_flaky_sensor() {
    let mut cache = EnvCache::new();

    // One good sample, then a run of failures.
    cache.update(Some(RawSample {
        temperature_tenths: 221,
        humidity_tenths: 603,
    }));
    let good = cache.reading();

    for _ in 0..10 {
        cache.update(None);
    }
    assert_eq!(cache.reading(), good);
}
