use embedded_hal::{delay::DelayNs, digital::OutputPin};
use fugit::MicrosDurationU32;
use log::trace;

use crate::Brightness;

/// Steps per PWM cycle. The duty counter runs 255 down to 1 and never hits 0.
pub const STEPS: u8 = u8::MAX;

/// Busy-wait software PWM on a single output pin.
///
/// Every [`SoftPwm::cycle`] blocks for [`STEPS`] delays of `step` each. The
/// pin goes high once the countdown reaches the requested level and is pulled
/// low after the last step, unless the level is [`Brightness::FULL`]. A full
/// level therefore leaves the pin high going into the next cycle.
pub struct SoftPwm<P, D> {
    pin: P,
    delay: D,
    step: MicrosDurationU32,
}

impl<P, D> SoftPwm<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D, step: MicrosDurationU32) -> Self {
        Self { pin, delay, step }
    }

    /// Run one blocking PWM cycle at `brightness`
    pub fn cycle(&mut self, brightness: Brightness) -> Result<(), P::Error> {
        let level = brightness.level();

        for t in (1..=STEPS).rev() {
            if t == level {
                self.pin.set_high()?;
            }
            self.delay.delay_us(self.step.ticks());
        }

        if level < STEPS {
            self.pin.set_low()?;
        }

        trace!("pwm cycle done at {level}");

        Ok(())
    }
}

impl<P, D> SoftPwm<P, D> {
    /// Number of steps the pin is driven high within a cycle
    pub const fn on_steps(brightness: Brightness) -> u8 {
        brightness.level()
    }

    /// High time within one cycle, for a given step length. Saturates at
    /// `u32::MAX` µs.
    pub fn on_time(brightness: Brightness, step: MicrosDurationU32) -> MicrosDurationU32 {
        MicrosDurationU32::from_ticks(
            step.ticks().saturating_mul(Self::on_steps(brightness) as u32),
        )
    }
}
