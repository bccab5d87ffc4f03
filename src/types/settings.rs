//! Camera settings decoded from raw header codes.

use std::fmt;

use serde::Serialize;

/// `geometric` bit set when the readout direction is reversed.
pub const GEOMETRIC_REVERSE: u16 = 0x02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdcType {
    LowNoise,
    HighCapacity,
    Unknown(u16),
}

impl From<u16> for AdcType {
    fn from(code: u16) -> Self {
        match code {
            8 => AdcType::LowNoise,
            9 => AdcType::HighCapacity,
            other => AdcType::Unknown(other),
        }
    }
}

impl AdcType {
    pub fn label(&self) -> &'static str {
        match self {
            AdcType::LowNoise => "Low Noise",
            AdcType::HighCapacity => "High Capacity",
            AdcType::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for AdcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ADC conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdcRate {
    TwoMhz,
    HundredKhz,
    Unknown(u16),
}

impl From<u16> for AdcRate {
    fn from(code: u16) -> Self {
        match code {
            12 => AdcRate::TwoMhz,
            6 => AdcRate::HundredKhz,
            other => AdcRate::Unknown(other),
        }
    }
}

impl AdcRate {
    pub fn label(&self) -> &'static str {
        match self {
            AdcRate::TwoMhz => "2 MHz",
            AdcRate::HundredKhz => "100 KHz",
            AdcRate::Unknown(_) => "Unknown",
        }
    }

    /// The 100 KHz setting reads the shift register in the opposite direction.
    pub fn is_low_rate(&self) -> bool {
        matches!(self, AdcRate::HundredKhz)
    }
}

impl fmt::Display for AdcRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
