use core::fmt::{self, Display, Formatter};

/// Decimal digits of an 8-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    hundreds: u8,
    tens: u8,
    ones: u8,
}

impl Digits {
    pub const fn new(value: u8) -> Self {
        Self {
            hundreds: value / 100,
            tens: value / 10 % 10,
            ones: value % 10,
        }
    }

    pub const fn hundreds(self) -> u8 {
        self.hundreds
    }

    pub const fn tens(self) -> u8 {
        self.tens
    }

    pub const fn ones(self) -> u8 {
        self.ones
    }

    /// Packed BCD, one nibble per digit (142 => 0x0142)
    pub const fn bcd(self) -> u16 {
        (self.hundreds as u16) << 8 | (self.tens as u16) << 4 | self.ones as u16
    }

    pub const fn value(self) -> u8 {
        self.hundreds * 100 + self.tens * 10 + self.ones
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.hundreds, self.tens) {
            (0, 0) => write!(f, "{}", self.ones),
            (0, tens) => write!(f, "{}{}", tens, self.ones),
            (hundreds, tens) => write!(f, "{}{}{}", hundreds, tens, self.ones),
        }
    }
}
