//! Driver for the OPT3001.
//! Provides the blocking I2C implementation; the async version mirrors this
//! API behind the `async` feature.

use crate::data_types::{AddressPin, ConversionMode, ConversionTime, FaultCount, Status};
use crate::error::Error;
use crate::registers::{
    addr, decode_conversion_mode, raw_to_lux, ConfigBits, CONFIG_WRITE_MASK,
    CONVERSION_POLL_ATTEMPTS, CONVERSION_POLL_INTERVAL_MS, DEFAULT_I2C_ADDRESS, DEVICE_ID,
};

/// OPT3001 ambient light sensor driver.
///
/// The driver owns the bus value it is constructed with. Since the
/// `embedded_hal` I2C trait is implemented for `&mut T`, passing `&mut bus`
/// shares an externally owned bus instead; the caller must then guarantee
/// exclusive access for the duration of each call, as the register-pointer
/// write and the following read are separate bus transactions.
pub struct Opt3001<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Opt3001<I2C> {
    /// Create a new driver instance with the default I2C address (0x44).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Create a new driver instance with a custom 7-bit I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a new driver instance for a given ADDR pin strapping.
    pub fn with_address_pin(i2c: I2C, pin: AddressPin) -> Self {
        Self::with_address(i2c, pin.address())
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Opt3001<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Verify the device identity and confirm register access.
    ///
    /// Fails with [`Error::DeviceNotFound`] if the DEVICE_ID register does
    /// not read 0x3001; no configuration is applied in that case. On a
    /// match the configuration register is read back once as a liveness
    /// check, with the value discarded.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        let id = self.read_register(addr::DEVICE_ID)?;
        if id != DEVICE_ID {
            return Err(Error::DeviceNotFound);
        }
        self.read_register(addr::CONFIG)?;
        Ok(())
    }

    /// Read the DEVICE_ID register (0x3001 on an OPT3001).
    pub fn device_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(addr::DEVICE_ID)
    }

    /// Read the MANUFACTURER_ID register (0x5449, "TI").
    pub fn manufacturer_id(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(addr::MANUFACTURER_ID)
    }

    /// Perform a single-shot measurement and return the illuminance in lux.
    ///
    /// Triggers a 100 ms conversion with automatic full-scale range, then
    /// polls the conversion-ready flag every 10 ms for up to 100 attempts
    /// (~1 s) before giving up with [`Error::ConversionTimeout`]. The
    /// calling thread is blocked for the full poll duration; the chip drops
    /// back to shutdown on its own once the conversion completes.
    pub fn read_lux<D>(&mut self, delay: &mut D) -> Result<u32, Error<I2C::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.start_conversion(ConversionTime::Ms100, FaultCount::One)?;

        let mut remaining = CONVERSION_POLL_ATTEMPTS;
        loop {
            delay.delay_ms(CONVERSION_POLL_INTERVAL_MS);
            let config = self.read_config()?;
            if config.contains(ConfigBits::CRF) {
                break;
            }
            remaining -= 1;
            if remaining == 0 {
                return Err(Error::ConversionTimeout);
            }
        }

        let raw = self.read_register(addr::RESULT)?;
        Ok(raw_to_lux(raw))
    }

    /// Trigger a single-shot conversion with automatic full-scale range.
    pub fn start_conversion(
        &mut self,
        time: ConversionTime,
        faults: FaultCount,
    ) -> Result<(), Error<I2C::Error>> {
        let mut bits = ConfigBits::RANGE_AUTO | ConfigBits::M0;
        if matches!(time, ConversionTime::Ms800) {
            bits |= ConfigBits::CT;
        }
        bits |= match faults {
            FaultCount::One => ConfigBits::empty(),
            FaultCount::Two => ConfigBits::FC0,
            FaultCount::Four => ConfigBits::FC1,
            FaultCount::Eight => ConfigBits::FC1 | ConfigBits::FC0,
        };
        self.write_config(bits)
    }

    /// Put the device into shutdown mode, keeping other settings unchanged.
    pub fn shutdown(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_config((ConfigBits::M1 | ConfigBits::M0).bits(), 0)
    }

    /// Read the current conversion mode.
    pub fn mode(&mut self) -> Result<ConversionMode, Error<I2C::Error>> {
        let config = self.read_config()?;
        Ok(match decode_conversion_mode(&config) {
            0b00 => ConversionMode::Shutdown,
            0b01 => ConversionMode::SingleShot,
            _ => ConversionMode::Continuous,
        })
    }

    /// Decode the status flags from the configuration register.
    pub fn read_status(&mut self) -> Result<Status, Error<I2C::Error>> {
        let config = self.read_config()?;
        Ok(Status {
            conversion_ready: config.contains(ConfigBits::CRF),
            overflow: config.contains(ConfigBits::OVF),
            flag_high: config.contains(ConfigBits::FH),
            flag_low: config.contains(ConfigBits::FL),
        })
    }

    /// Read the configuration register as typed bits.
    pub fn read_config(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        Ok(ConfigBits::from_bits_truncate(
            self.read_register(addr::CONFIG)?,
        ))
    }

    /// Write the configuration register. Read-only flag bits are masked out.
    pub fn write_config(&mut self, config: ConfigBits) -> Result<(), Error<I2C::Error>> {
        self.write_register(addr::CONFIG, config.bits() & CONFIG_WRITE_MASK)
    }

    /// Update masked bits of the configuration register (read-modify-write).
    pub fn update_config(&mut self, mask: u16, value: u16) -> Result<(), Error<I2C::Error>> {
        let cur = self.read_register(addr::CONFIG)?;
        let new = (cur & !mask) | (value & mask);
        self.write_register(addr::CONFIG, new & CONFIG_WRITE_MASK)
    }

    /// Write a 16-bit register, MSB first.
    pub fn write_register(&mut self, reg: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg, bytes[0], bytes[1]])
            .map_err(Error::I2c)
    }

    /// Read a 16-bit register, MSB first.
    pub fn read_register(&mut self, reg: u8) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }
}

#[cfg(feature = "async")]
impl<I2C> Opt3001<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<(), Error<I2C::Error>> {
        let id = self.read_register_async(addr::DEVICE_ID).await?;
        if id != DEVICE_ID {
            return Err(Error::DeviceNotFound);
        }
        self.read_register_async(addr::CONFIG).await?;
        Ok(())
    }

    pub async fn device_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register_async(addr::DEVICE_ID).await
    }

    pub async fn manufacturer_id_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register_async(addr::MANUFACTURER_ID).await
    }

    /// Async version of [`read_lux`](Self::read_lux).
    pub async fn read_lux_async<D>(&mut self, delay: &mut D) -> Result<u32, Error<I2C::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.start_conversion_async(ConversionTime::Ms100, FaultCount::One)
            .await?;

        let mut remaining = CONVERSION_POLL_ATTEMPTS;
        loop {
            delay.delay_ms(CONVERSION_POLL_INTERVAL_MS).await;
            let config = self.read_config_async().await?;
            if config.contains(ConfigBits::CRF) {
                break;
            }
            remaining -= 1;
            if remaining == 0 {
                return Err(Error::ConversionTimeout);
            }
        }

        let raw = self.read_register_async(addr::RESULT).await?;
        Ok(raw_to_lux(raw))
    }

    pub async fn start_conversion_async(
        &mut self,
        time: ConversionTime,
        faults: FaultCount,
    ) -> Result<(), Error<I2C::Error>> {
        let mut bits = ConfigBits::RANGE_AUTO | ConfigBits::M0;
        if matches!(time, ConversionTime::Ms800) {
            bits |= ConfigBits::CT;
        }
        bits |= match faults {
            FaultCount::One => ConfigBits::empty(),
            FaultCount::Two => ConfigBits::FC0,
            FaultCount::Four => ConfigBits::FC1,
            FaultCount::Eight => ConfigBits::FC1 | ConfigBits::FC0,
        };
        self.write_config_async(bits).await
    }

    pub async fn shutdown_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_config_async((ConfigBits::M1 | ConfigBits::M0).bits(), 0)
            .await
    }

    pub async fn mode_async(&mut self) -> Result<ConversionMode, Error<I2C::Error>> {
        let config = self.read_config_async().await?;
        Ok(match decode_conversion_mode(&config) {
            0b00 => ConversionMode::Shutdown,
            0b01 => ConversionMode::SingleShot,
            _ => ConversionMode::Continuous,
        })
    }

    pub async fn read_status_async(&mut self) -> Result<Status, Error<I2C::Error>> {
        let config = self.read_config_async().await?;
        Ok(Status {
            conversion_ready: config.contains(ConfigBits::CRF),
            overflow: config.contains(ConfigBits::OVF),
            flag_high: config.contains(ConfigBits::FH),
            flag_low: config.contains(ConfigBits::FL),
        })
    }

    pub async fn read_config_async(&mut self) -> Result<ConfigBits, Error<I2C::Error>> {
        Ok(ConfigBits::from_bits_truncate(
            self.read_register_async(addr::CONFIG).await?,
        ))
    }

    pub async fn write_config_async(&mut self, config: ConfigBits) -> Result<(), Error<I2C::Error>> {
        self.write_register_async(addr::CONFIG, config.bits() & CONFIG_WRITE_MASK)
            .await
    }

    pub async fn update_config_async(
        &mut self,
        mask: u16,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let cur = self.read_register_async(addr::CONFIG).await?;
        let new = (cur & !mask) | (value & mask);
        self.write_register_async(addr::CONFIG, new & CONFIG_WRITE_MASK)
            .await
    }

    pub async fn write_register_async(
        &mut self,
        reg: u8,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let bytes = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg, bytes[0], bytes[1]])
            .await
            .map_err(Error::I2c)
    }

    pub async fn read_register_async(&mut self, reg: u8) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }
}
