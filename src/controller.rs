use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use log::{debug, info};
use tap::Tap;

use crate::{
    button::{Button, Buttons},
    can_log,
    pwm::SoftPwm,
    set_can_log, Brightness, Config, Reset,
};

/// Two-button LED dimmer.
///
/// Owns every pin it touches and the brightness level, which only
/// [`Dimmer::tick`] changes.
pub struct Dimmer<U, D, R, P, Dl, Rs> {
    buttons: Buttons<U, D>,
    reset_line: R,
    pwm: SoftPwm<P, Dl>,
    reset: Rs,
    brightness: Brightness,
    config: Config,
}

impl<U, D, R, P, Dl, Rs> Dimmer<U, D, R, P, Dl, Rs>
where
    U: InputPin,
    D: InputPin<Error = U::Error>,
    R: InputPin<Error = U::Error>,
    P: OutputPin<Error = U::Error>,
    Dl: DelayNs,
    Rs: Reset,
{
    pub fn new(
        config: Config,
        buttons: Buttons<U, D>,
        reset_line: R,
        led: P,
        delay: Dl,
        reset: Rs,
    ) -> Self {
        Self {
            buttons,
            reset_line,
            pwm: SoftPwm::new(led, delay, config.step),
            reset,
            brightness: config.initial_brightness,
            config,
        }
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// One pass of the control loop: poll buttons, adjust, run a PWM cycle,
    /// then check the reset line. Diverges if reset is held.
    pub fn tick(&mut self) -> Result<Button, U::Error> {
        let button = self.buttons.read()?;

        let prev = self.brightness;
        self.brightness = prev.adjust(button).tap(|next| {
            if *next != prev && can_log() {
                debug!("{next}");
            }
        });

        self.pwm.cycle(self.brightness)?;

        if self.reset_line.is_low()? {
            info!("Reset requested, entering bootloader");
            self.reset.reset();
        }

        Ok(button)
    }

    /// Run the control loop forever. Only a pin error or a reset ends it.
    pub fn run(mut self) -> Result<Infallible, U::Error> {
        set_can_log(self.config.log_changes);
        info!(
            "Dimmer running: {}, step {}us, carrier {}Hz",
            self.brightness,
            self.config.step.ticks(),
            self.config.carrier_hz()
        );

        loop {
            self.tick()?;
        }
    }
}
