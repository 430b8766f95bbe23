//! Access control core - code entry, verification and the actuation
//! sequencer.
//!
//! State machine: `Idle → Triggered → {Granting | Denying} → Idle`.
//! The main loop idles until the joystick gesture triggers verification;
//! the chosen branch's plan runs to completion and entry state resets on
//! both paths.

pub mod entry;
pub mod sequence_plan;
pub mod sequencer;
