//! Input subsystem - joystick axis and code-entry buttons.
//!
//! The joystick sampler runs as its own Embassy task at a fixed 100 ms
//! cadence; buttons are polled by the main loop each iteration.

pub mod axis_logic;
pub mod buttons;
pub mod joystick;
