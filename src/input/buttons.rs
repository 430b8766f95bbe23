//! GPIO button input.
//!
//! Three momentary buttons (active-low with internal pull-up):
//!   - INC  - bump the digit counter
//!   - SAVE - commit the counter into the next code slot
//!   - DEC  - drop the digit counter
//!
//! Levels are read once per main-loop iteration; the loop period is the
//! only debounce, so a held button repeats once per iteration. The three
//! reads are independent - simultaneous presses all take effect.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

/// Pressed state of all three buttons for one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonLevels {
    pub increment: bool,
    pub save: bool,
    pub decrement: bool,
}

/// The three code-entry buttons.
pub struct Buttons<'d> {
    inc: Input<'d>,
    save: Input<'d>,
    dec: Input<'d>,
}

impl<'d> Buttons<'d> {
    pub fn new(inc_pin: AnyPin, save_pin: AnyPin, dec_pin: AnyPin) -> Self {
        Self {
            inc: Input::new(inc_pin, Pull::Up),
            save: Input::new(save_pin, Pull::Up),
            dec: Input::new(dec_pin, Pull::Up),
        }
    }

    /// Snapshot all three levels. Active-low: pressed reads low.
    pub fn poll(&self) -> ButtonLevels {
        ButtonLevels {
            increment: self.inc.is_low(),
            save: self.save.is_low(),
            decrement: self.dec.is_low(),
        }
    }
}
