//! Latch motor facade - PWM speed plus a direction GPIO.
//!
//! The H-bridge takes a PWM duty for speed and a level for rotation
//! sense. Reversing straight from the opposite sense slams the gearbox,
//! so the facade drops to neutral for 200 ms first; `stop()` settles for
//! 100 ms before the next command.

use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use embassy_nrf::Peripheral;
use embassy_time::{Duration, Timer};

/// PWM top value at Div16 prescale: 1 MHz / 1000 = 1 kHz carrier (1 ms
/// period, per the H-bridge datasheet).
const PWM_TOP: u16 = 1000;

/// Neutral pause when reversing rotation sense (ms).
const REVERSE_PAUSE_MS: u64 = 200;

/// Settle pause after a stop (ms).
const STOP_SETTLE_MS: u64 = 100;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Sense {
    Stopped,
    Opening,
    Closing,
}

/// Door latch motor driver.
pub struct LatchMotor<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
    dir: Output<'d>,
    sense: Sense,
}

impl<'d, T: Instance> LatchMotor<'d, T> {
    /// Set up the PWM carrier and park the motor.
    pub fn new(
        pwm: impl Peripheral<P = T> + 'd,
        pwm_pin: AnyPin,
        dir_pin: AnyPin,
    ) -> Self {
        let mut pwm = SimplePwm::new_1ch(pwm, pwm_pin);
        pwm.set_prescaler(Prescaler::Div16);
        pwm.set_max_duty(PWM_TOP);
        pwm.set_duty(0, 0);
        let dir = Output::new(dir_pin, Level::Low, OutputDrive::Standard);
        Self {
            pwm,
            dir,
            sense: Sense::Stopped,
        }
    }

    fn duty_for(speed: f32) -> u16 {
        let clamped = speed.clamp(0.0, 1.0);
        (clamped * PWM_TOP as f32) as u16
    }

    /// Drive in the opening direction at `speed` (clamped to [0, 1]).
    pub async fn open(&mut self, speed: f32) {
        debug!("motor: open at {}", speed);
        if self.sense == Sense::Closing {
            self.pwm.set_duty(0, 0);
            Timer::after(Duration::from_millis(REVERSE_PAUSE_MS)).await;
        }
        self.dir.set_low();
        self.pwm.set_duty(0, Self::duty_for(speed));
        self.sense = Sense::Opening;
    }

    /// Drive in the closing direction at `speed` (clamped to [0, 1]).
    pub async fn close(&mut self, speed: f32) {
        debug!("motor: close at {}", speed);
        if self.sense == Sense::Opening {
            self.pwm.set_duty(0, 0);
            Timer::after(Duration::from_millis(REVERSE_PAUSE_MS)).await;
        }
        self.dir.set_high();
        self.pwm.set_duty(0, Self::duty_for(speed));
        self.sense = Sense::Closing;
    }

    /// Cut the PWM and let the rotor settle.
    pub async fn stop(&mut self) {
        debug!("motor: stop");
        self.pwm.set_duty(0, 0);
        Timer::after(Duration::from_millis(STOP_SETTLE_MS)).await;
        self.sense = Sense::Stopped;
    }
}
