//! Code entry accumulator.
//!
//! Three momentary buttons edit a single digit counter; the SAVE button
//! commits the counter into the next free slot of a fixed-length entered
//! code. All operations saturate silently at their bounds - no wraparound,
//! no error.

use crate::config::{CODE_LEN, DIGIT_MAX};

/// Accumulates a fixed-length access code from button presses.
///
/// Slots hold ASCII digit bytes; `0` marks an unset slot. The slot layout
/// matches the reference code so verification is a plain byte compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodeEntry {
    digit: u8,
    index: usize,
    slots: [u8; CODE_LEN],
}

impl Default for CodeEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEntry {
    /// Fresh accumulator: counter at 0, no slots filled.
    pub const fn new() -> Self {
        Self {
            digit: 0,
            index: 0,
            slots: [0; CODE_LEN],
        }
    }

    /// Current digit counter value, always in 0..=9.
    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Position of the next free slot, always in 0..=CODE_LEN.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The full slot array, unset slots as 0.
    pub fn entered(&self) -> &[u8; CODE_LEN] {
        &self.slots
    }

    /// The filled slots only, as ASCII digit bytes.
    pub fn text(&self) -> &[u8] {
        &self.slots[..self.index]
    }

    /// Bump the digit counter, saturating at 9.
    pub fn increment(&mut self) {
        if self.digit < DIGIT_MAX {
            self.digit += 1;
        }
    }

    /// Drop the digit counter, saturating at 0.
    pub fn decrement(&mut self) {
        if self.digit > 0 {
            self.digit -= 1;
        }
    }

    /// Commit the current digit into the next free slot.
    ///
    /// A no-op once all slots are filled - extra presses are silently
    /// ignored until the next reset.
    pub fn save(&mut self) {
        if self.index < CODE_LEN {
            self.slots[self.index] = b'0' + self.digit;
            self.index += 1;
        }
    }

    /// Clear all slots and reset counter and index to 0.
    ///
    /// Called after every completed access sequence, granted or denied.
    pub fn reset(&mut self) {
        self.digit = 0;
        self.index = 0;
        self.slots = [0; CODE_LEN];
    }
}
