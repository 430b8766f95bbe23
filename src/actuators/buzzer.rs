//! Piezo buzzer tone generation over PWM.
//!
//! Frequency is set by reprogramming the PWM top value at a fixed 1 MHz
//! tick; the melody and error tones all sound at 50 % duty.

use crate::config::TONE_DUTY;
use embassy_nrf::gpio::AnyPin;
use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use embassy_nrf::Peripheral;

/// PWM ticks per second at Div16 prescale (16 MHz / 16).
const PWM_TICK_HZ: f32 = 1_000_000.0;

/// Piezo buzzer driver.
pub struct Buzzer<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> Buzzer<'d, T> {
    /// Set up the PWM, output silent.
    pub fn new(pwm: impl Peripheral<P = T> + 'd, pin: AnyPin) -> Self {
        let mut pwm = SimplePwm::new_1ch(pwm, pin);
        pwm.set_prescaler(Prescaler::Div16);
        pwm.set_max_duty(u16::MAX);
        pwm.set_duty(0, 0);
        Self { pwm }
    }

    /// Sound a tone at `freq_hz` until `silence()` is called.
    pub fn play(&mut self, freq_hz: f32) {
        let top = (PWM_TICK_HZ / freq_hz) as u16;
        self.pwm.set_max_duty(top);
        self.pwm.set_duty(0, (top as f32 * TONE_DUTY) as u16);
    }

    /// Stop the tone.
    pub fn silence(&mut self) {
        self.pwm.set_duty(0, 0);
    }
}
