//! SSD1306 OLED status presenter.
//!
//! Two views: the rolling status screen (environment, entered code,
//! digit counter, lock state) and the transient access-result screen
//! shown while a sequence runs. Draw failures are swallowed - the
//! display is advisory and a dropped frame fixes itself next iteration.

use crate::access::sequence_plan::LockState;
use crate::sensors::env_cache::EnvReading;
use core::fmt::Write;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn lock_label(lock: LockState) -> &'static str {
    match lock {
        LockState::Locked => "Locked",
        LockState::Unlocked => "Unlocked",
    }
}

/// Render the rolling status screen.
pub fn draw_status<I2C>(
    display: &mut Display<I2C>,
    code_text: &str,
    digit: u8,
    reading: EnvReading,
    lock: LockState,
) where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut line: heapless::String<24> = heapless::String::new();
    let _ = write!(line, "Temp: {:.1} C", reading.temperature_c);
    let _ = Text::new(line.as_str(), Point::new(0, 10), text_style()).draw(display);

    line.clear();
    let _ = write!(line, "Humidity: {:.1} %", reading.humidity_pct);
    let _ = Text::new(line.as_str(), Point::new(0, 21), text_style()).draw(display);

    line.clear();
    let _ = write!(line, "Code: {}", code_text);
    let _ = Text::new(line.as_str(), Point::new(0, 32), text_style()).draw(display);

    line.clear();
    let _ = write!(line, "Count: {}", digit);
    let _ = Text::new(line.as_str(), Point::new(0, 43), text_style()).draw(display);

    let _ = Text::new(lock_label(lock), Point::new(0, 54), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the transient access-result screen.
pub fn draw_access_result<I2C>(display: &mut Display<I2C>, message: &str, lock: LockState)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new(message, Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new(lock_label(lock), Point::new(0, 24), text_style()).draw(display);

    let _ = display.flush();
}
