#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::xtensa_lx_rt::entry;

use dimmer::{board::Board, Config};

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    let dimmer = Board::init().into_dimmer(Config::default());

    match dimmer.run() {
        Ok(never) => match never {},
        Err(err) => match err {},
    }
}
