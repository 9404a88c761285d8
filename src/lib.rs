#![cfg_attr(not(test), no_std)]

#[cfg(feature = "esp32s3")]
pub mod board;
mod brightness;
pub mod button;
mod config;
pub mod controller;
pub mod pwm;
mod reset;
pub mod util;

#[cfg(test)]
mod test_utils;

use core::cell::Cell;

use critical_section::Mutex;

pub use brightness::Brightness;
pub use config::Config;
pub use reset::Reset;

static CAN_LOG: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Whether the controller is allowed to emit per-iteration logs
pub fn can_log() -> bool {
    critical_section::with(|cs| CAN_LOG.borrow(cs).get())
}

pub fn set_can_log(can_log: bool) {
    critical_section::with(|cs| CAN_LOG.borrow(cs).set(can_log));
}
