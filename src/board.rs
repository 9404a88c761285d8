//! ESP32-S3 board support: clock, pins and the bootloader reset.

use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::Peripherals,
    system::software_reset,
};
use log::info;

use crate::{button::Buttons, controller::Dimmer, Config, Reset};

pub type BoardDimmer = Dimmer<
    Input<'static>,
    Input<'static>,
    Input<'static>,
    Output<'static>,
    Delay,
    SoftwareReset,
>;

pub struct Board {
    /// GPIO5, active low
    pub up: Input<'static>,
    /// GPIO6, active low
    pub down: Input<'static>,
    /// GPIO0 (BOOT), active low
    pub reset_line: Input<'static>,
    /// GPIO20
    pub led: Output<'static>,
    pub delay: Delay,
}

impl Board {
    /// Bring up the clock tree and configure every pin the dimmer uses.
    /// Must be called exactly once.
    pub fn init() -> Self {
        let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
        Self::configure(peripherals)
    }

    fn configure(peripherals: Peripherals) -> Self {
        let board = Self {
            up: Input::new(peripherals.GPIO5, pull_up()),
            down: Input::new(peripherals.GPIO6, pull_up()),
            reset_line: Input::new(peripherals.GPIO0, pull_up()),
            led: Output::new(peripherals.GPIO20, Level::Low, OutputConfig::default()),
            delay: Delay::new(),
        };

        info!("Board ready: up=GPIO5 down=GPIO6 reset=GPIO0 led=GPIO20");

        board
    }

    pub fn into_dimmer(self, config: Config) -> BoardDimmer {
        Dimmer::new(
            config,
            Buttons::new(self.up, self.down),
            self.reset_line,
            self.led,
            self.delay,
            SoftwareReset,
        )
    }
}

fn pull_up() -> InputConfig {
    InputConfig::default().with_pull(Pull::Up)
}

/// Chip reset. The ROM bootloader runs before the application again.
pub struct SoftwareReset;

impl Reset for SoftwareReset {
    fn reset(&mut self) -> ! {
        software_reset()
    }
}
