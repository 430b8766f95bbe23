//! Actuator facades - latch motor and piezo buzzer.
//!
//! Both are thin wrappers over nRF PWM channels; the access sequencer
//! drives them through the step plans in `access::sequence_plan`.

pub mod buzzer;
pub mod motor;
