//! User interface subsystem - SSD1306 OLED over I²C.

pub mod display;
