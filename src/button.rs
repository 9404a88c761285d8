use embedded_hal::digital::InputPin;

/// A single poll of the up/down buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    None,
    Up,
    Down,
}

impl Button {
    /// Resolve raw pressed states. Up always wins over down.
    pub const fn from_levels(up_pressed: bool, down_pressed: bool) -> Self {
        if up_pressed {
            Button::Up
        } else if down_pressed {
            Button::Down
        } else {
            Button::None
        }
    }
}

/// Active-low up/down button pair
pub struct Buttons<U, D> {
    up: U,
    down: D,
}

impl<U, D> Buttons<U, D>
where
    U: InputPin,
    D: InputPin<Error = U::Error>,
{
    pub fn new(up: U, down: D) -> Self {
        Self { up, down }
    }

    /// Raw level poll, no debouncing. The down line is only sampled when up
    /// is released.
    pub fn read(&mut self) -> Result<Button, U::Error> {
        if self.up.is_low()? {
            return Ok(Button::Up);
        }

        Ok(Button::from_levels(false, self.down.is_low()?))
    }
}
