//! Error definitions for the OPT3001 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Eq, PartialEq)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// DEVICE_ID readback did not match 0x3001 during initialization.
    DeviceNotFound,
    /// Conversion-ready flag was never observed within the poll budget.
    ConversionTimeout,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::DeviceNotFound => write!(f, "device ID mismatch, no OPT3001 on the bus"),
            Error::ConversionTimeout => write!(f, "conversion did not complete in time"),
        }
    }
}
