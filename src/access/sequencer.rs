//! Access sequence runner.
//!
//! Walks a step plan against the buzzer and latch motor with blocking
//! timed delays. This is the one deliberately long-running piece of the
//! firmware: the main loop awaits it inline, suspending button and
//! sensor polling until the sequence completes, while the joystick
//! sampler task keeps its own cadence. There is no cancellation - once
//! triggered, a sequence runs to the end.

use crate::access::sequence_plan::SequenceStep;
use crate::actuators::buzzer::Buzzer;
use crate::actuators::motor::LatchMotor;
use embassy_nrf::pwm::Instance;
use embassy_time::{Duration, Timer};

/// Execute every step of a plan in order.
pub async fn run_steps<M, B>(
    steps: &[SequenceStep],
    motor: &mut LatchMotor<'_, M>,
    buzzer: &mut Buzzer<'_, B>,
) where
    M: Instance,
    B: Instance,
{
    for step in steps {
        match *step {
            SequenceStep::Tone {
                freq_hz,
                sound_ms,
                quiet_ms,
            } => {
                buzzer.play(freq_hz);
                Timer::after(Duration::from_millis(sound_ms)).await;
                buzzer.silence();
                Timer::after(Duration::from_millis(quiet_ms)).await;
            }
            SequenceStep::DriveOpen { speed, ms } => {
                motor.open(speed).await;
                Timer::after(Duration::from_millis(ms)).await;
                motor.stop().await;
            }
            SequenceStep::DriveClose { speed, ms } => {
                motor.close(speed).await;
                Timer::after(Duration::from_millis(ms)).await;
                motor.stop().await;
            }
            SequenceStep::Hold { ms } => {
                Timer::after(Duration::from_millis(ms)).await;
            }
        }
    }
}
