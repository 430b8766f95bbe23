//! codelatch firmware entry point.
//!
//! An access-control latch controller: three buttons compose a 4-digit
//! code on an OLED, a joystick flick submits it, and the controller
//! drives the latch motor and buzzer through the grant or deny sequence.
//! A DHT22 readout shares the status screen.
//!
//! ## Task layout
//!
//! - **main loop** (this file): 1 s cadence - poll buttons, refresh the
//!   environment cache, redraw status, check the submit gesture and run
//!   the access sequence inline (deliberately blocking, up to ~40 s on
//!   the grant path).
//! - **joystick sampler** (`input::joystick`): 100 ms cadence, publishes
//!   the normalized axis position through an atomic. Keeps running while
//!   a sequence blocks the main loop.
//!
//! Module organization:
//!
//! - [`access`] - code entry, verification, actuation sequencer
//! - [`input`] - joystick sampler and buttons
//! - [`sensors`] - DHT22 driver and the last-good cache
//! - [`ui`] - SSD1306 status presenter
//! - [`actuators`] - latch motor and buzzer facades

#![no_std]
#![no_main]

mod access;
mod actuators;
mod config;
mod error;
mod input;
mod sensors;
mod ui;

use access::entry::CodeEntry;
use access::sequence_plan::{self, AccessDecision, LockState};
use access::sequencer;
use actuators::buzzer::Buzzer;
use actuators::motor::LatchMotor;
use config::{LOOP_PERIOD_MS, REFERENCE_CODE};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::saadc::{ChannelConfig, Config as SaadcConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals, saadc};
use embassy_time::{Duration, Timer};
use input::axis_logic::exceeds_trigger;
use input::buttons::Buttons;
use sensors::dht22::Dht22;
use sensors::env_cache::EnvCache;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("codelatch starting");

    // OLED on TWI.
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = ui::display::init(i2c);

    // Joystick X axis on SAADC, sampled by its own task.
    let channel = ChannelConfig::single_ended(p.P0_02);
    let saadc = Saadc::new(p.SAADC, Irqs, SaadcConfig::default(), [channel]);
    spawner.must_spawn(input::joystick::sampler_task(saadc));

    let buttons = Buttons::new(p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade());
    let mut dht = Dht22::new(p.P0_04.degrade());
    let mut motor = LatchMotor::new(p.PWM0, p.P0_13.degrade(), p.P0_14.degrade());
    let mut buzzer = Buzzer::new(p.PWM1, p.P0_15.degrade());

    let mut entry = CodeEntry::new();
    let mut env = EnvCache::new();
    let mut lock = LockState::Locked;

    ui::display::draw_status(&mut display, "", entry.digit(), env.reading(), lock);

    loop {
        // Button levels, one read per iteration. The loop period is the
        // debounce window; all three act independently.
        let pressed = buttons.poll();
        if pressed.increment {
            entry.increment();
        }
        if pressed.save {
            entry.save();
        }
        if pressed.decrement {
            entry.decrement();
        }

        // A failed read keeps the previous reading on screen.
        env.update(dht.read().await.ok());

        let code_text = core::str::from_utf8(entry.text()).unwrap_or("");
        ui::display::draw_status(&mut display, code_text, entry.digit(), env.reading(), lock);

        let axis = input::joystick::axis_position();
        if exceeds_trigger(axis) {
            match sequence_plan::verify_code(&REFERENCE_CODE, entry.entered()) {
                AccessDecision::Granted => {
                    info!("code accepted, running grant sequence");
                    lock = LockState::Unlocked;
                    ui::display::draw_access_result(&mut display, "Unlocked", lock);
                    sequencer::run_steps(&sequence_plan::grant_steps(), &mut motor, &mut buzzer)
                        .await;
                    // Note: the close step does not re-assert Locked;
                    // kept bug-compatible with the unit this replaces.
                }
                AccessDecision::Denied => {
                    warn!("code rejected");
                    ui::display::draw_access_result(
                        &mut display,
                        "Wrong Password",
                        LockState::Locked,
                    );
                    sequencer::run_steps(&sequence_plan::deny_steps(), &mut motor, &mut buzzer)
                        .await;
                }
            }

            // Status redraw happens before the reset, so the screen
            // briefly shows the code that was just judged.
            let code_text = core::str::from_utf8(entry.text()).unwrap_or("");
            ui::display::draw_status(&mut display, code_text, entry.digit(), env.reading(), lock);
            entry.reset();
        }

        Timer::after(Duration::from_millis(LOOP_PERIOD_MS)).await;
    }
}
