use core::fmt::{self, Display, Formatter};

use crate::{button::Button, util::Digits};

/// LED brightness level, also the PWM duty in 1/255 steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    pub const OFF: Brightness = Brightness(0);
    pub const FULL: Brightness = Brightness(u8::MAX);
    pub const DEFAULT: Brightness = Brightness(125);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// One step brighter, held at [`Brightness::FULL`]
    pub const fn step_up(self) -> Self {
        if self.0 < u8::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One step dimmer, held at [`Brightness::OFF`]
    pub const fn step_down(self) -> Self {
        if self.0 > 0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    /// Apply a single button reading
    pub const fn adjust(self, button: Button) -> Self {
        match button {
            Button::Up => self.step_up(),
            Button::Down => self.step_down(),
            Button::None => self,
        }
    }

    pub const fn digits(self) -> Digits {
        Digits::new(self.0)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Brightness {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "brightness {}", self.digits())
    }
}
