//! Data types for the OPT3001 driver.

use crate::registers::DEFAULT_I2C_ADDRESS;

/// State of the ADDR pin, which selects one of four 7-bit I2C addresses.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressPin {
    /// ADDR tied to GND: 0x44 (the default).
    Gnd,
    /// ADDR tied to VDD: 0x45.
    Vdd,
    /// ADDR tied to SDA: 0x46.
    Sda,
    /// ADDR tied to SCL: 0x47.
    Scl,
}

impl AddressPin {
    /// The 7-bit I2C address selected by this pin strapping.
    pub fn address(self) -> u8 {
        match self {
            AddressPin::Gnd => DEFAULT_I2C_ADDRESS,
            AddressPin::Vdd => 0x45,
            AddressPin::Sda => 0x46,
            AddressPin::Scl => 0x47,
        }
    }
}

/// Conversion mode field M[10:9] of the configuration register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionMode {
    /// No conversions; lowest power draw.
    Shutdown,
    /// One conversion per explicit trigger, then back to shutdown.
    SingleShot,
    /// Free-running conversions.
    Continuous,
}

/// Conversion (integration) time per measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionTime {
    Ms100,
    Ms800,
}

/// Consecutive fault events required before the interrupt flags assert.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultCount {
    One,
    Two,
    Four,
    Eight,
}

/// Status flags decoded from the configuration register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Status {
    /// CRF: a conversion has completed since the result was last read.
    pub conversion_ready: bool,
    /// OVF: the measurement overflowed the full-scale range.
    pub overflow: bool,
    /// FH: the result exceeded the high limit for the configured fault count.
    pub flag_high: bool,
    /// FL: the result fell below the low limit for the configured fault count.
    pub flag_low: bool,
}
