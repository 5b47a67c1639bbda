use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutOfRange {
    #[error("pid number out of range, maximum is {}", Pid::NUMBER_MAX)]
    Number,
    #[error("pid serial out of range, maximum is {}", Pid::SERIAL_MAX)]
    Serial,
}

/// A local process identifier, `<0.number.serial>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid {
    serial: u32,
    number: u32,
}
impl Pid {
    pub const NUMBER_MAX: u32 = (1 << 15) - 1;
    pub const SERIAL_MAX: u32 = (1 << 13) - 1;

    pub fn new(number: u32, serial: u32) -> Result<Self, OutOfRange> {
        if number > Self::NUMBER_MAX {
            return Err(OutOfRange::Number);
        }
        if serial > Self::SERIAL_MAX {
            return Err(OutOfRange::Serial);
        }
        Ok(Self { serial, number })
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub fn serial(&self) -> u32 {
        self.serial
    }
}
impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<0.{}.{}>", self.number, self.serial)
    }
}
