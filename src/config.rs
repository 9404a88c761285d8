use fugit::{ExtU32, MicrosDurationU32};

use crate::{pwm::STEPS, Brightness};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Brightness at power-on
    pub initial_brightness: Brightness,

    /// Busy-wait between two PWM steps
    pub step: MicrosDurationU32,

    /// Log brightness changes from the control loop
    pub log_changes: bool,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            initial_brightness: Brightness::DEFAULT,
            step: MicrosDurationU32::micros(20),
            log_changes: true,
        }
    }

    pub fn with_initial_brightness(mut self, level: u8) -> Self {
        self.initial_brightness = Brightness::new(level);
        self
    }

    pub fn with_step(mut self, step: MicrosDurationU32) -> Self {
        self.step = step;
        self
    }

    pub fn with_step_micros(self, micros: u32) -> Self {
        self.with_step(micros.micros())
    }

    pub fn with_log_changes(mut self, log_changes: bool) -> Self {
        self.log_changes = log_changes;
        self
    }

    /// Length of one full PWM cycle, saturating at `u32::MAX` µs
    pub fn period(&self) -> MicrosDurationU32 {
        MicrosDurationU32::from_ticks(self.step.ticks().saturating_mul(STEPS as u32))
    }

    /// PWM carrier frequency in Hz, 0 for a zero-length step
    pub fn carrier_hz(&self) -> u32 {
        match self.period().ticks() {
            0 => 0,
            period => 1_000_000 / period,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
