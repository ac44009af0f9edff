//! Register map and constants for the OPT3001.
//! Bit positions follow the datasheet register layout; all registers are
//! 16-bit and transmitted MSB first on the wire.

/// Default 7-bit I2C address (ADDR pin tied to GND).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x44;
/// The same address in the left-shifted 8-bit convention some vendor
/// libraries ship (0x88). Their documentation occasionally claims 0x47 as
/// the default, which is actually the ADDR-to-SCL variant.
pub const DEFAULT_I2C_ADDRESS_8BIT: u8 = DEFAULT_I2C_ADDRESS << 1;

/// Register addresses.
pub mod addr {
    /// Measurement result, exponent\[15:12\] + mantissa\[11:0\].
    pub const RESULT: u8 = 0x00;
    /// Configuration word (range, conversion time, mode, fault count, flags).
    pub const CONFIG: u8 = 0x01;
    /// Manufacturer ID, reads 0x5449 ("TI").
    pub const MANUFACTURER_ID: u8 = 0x7E;
    /// Device ID, reads 0x3001.
    pub const DEVICE_ID: u8 = 0x7F;
}

/// Expected MANUFACTURER_ID register value.
pub const MANUFACTURER_ID: u16 = 0x5449;
/// Expected DEVICE_ID register value.
pub const DEVICE_ID: u16 = 0x3001;

/// Power-on value of the configuration register.
pub const CONFIG_RESET: u16 = 0xC810;
/// Writable configuration bits. OVF, CRF, FH and FL are read-only status
/// flags and are masked out of every write.
pub const CONFIG_WRITE_MASK: u16 = 0xFE1F;

/// Poll budget for a conversion: 100 polls of 10 ms each, ~1 s worst case.
pub const CONVERSION_POLL_ATTEMPTS: u32 = 100;
pub const CONVERSION_POLL_INTERVAL_MS: u32 = 10;

bitflags::bitflags! {
    /// Configuration register bits (0x01).
    pub struct ConfigBits: u16 {
        /// Bits 15-12: full-scale range exponent.
        const RN0 = 1 << 12;
        const RN1 = 1 << 13;
        const RN2 = 1 << 14;
        const RN3 = 1 << 15;
        /// Bit 11: conversion time (0 = 100 ms, 1 = 800 ms).
        const CT  = 1 << 11;
        /// Bits 10-9: conversion mode (00 shutdown, 01 single-shot, 10/11 continuous).
        const M1  = 1 << 10;
        const M0  = 1 << 9;
        /// Bit 8: overflow flag (read-only).
        const OVF = 1 << 8;
        /// Bit 7: conversion-ready flag (read-only).
        const CRF = 1 << 7;
        /// Bit 6: flag high (read-only).
        const FH  = 1 << 6;
        /// Bit 5: flag low (read-only).
        const FL  = 1 << 5;
        /// Bit 4: latched interrupt reporting.
        const L   = 1 << 4;
        /// Bit 3: interrupt polarity.
        const POL = 1 << 3;
        /// Bit 2: exponent mask mode.
        const ME  = 1 << 2;
        /// Bits 1-0: fault count (00 = 1 fault, 01 = 2, 10 = 4, 11 = 8).
        const FC1 = 1 << 1;
        const FC0 = 1 << 0;

        /// RN = 0b1100: automatic full-scale range selection.
        const RANGE_AUTO = Self::RN3.bits() | Self::RN2.bits();
    }
}

/// Decode the mode field M\[10:9\] into its 2-bit index
/// (0b00 shutdown, 0b01 single-shot, 0b10/0b11 continuous).
pub fn decode_conversion_mode(bits: &ConfigBits) -> u8 {
    ((bits.bits() >> 9) & 0b11) as u8
}

/// Decode a raw result word into integer lux.
///
/// The result register holds a 4-bit exponent and a 12-bit mantissa with an
/// LSB weight of 0.01 lux, so lux = mantissa * 2^exponent / 100. The
/// division truncates; sub-lux resolution is dropped.
pub fn raw_to_lux(raw: u16) -> u32 {
    let exponent = (raw >> 12) & 0x0F;
    let mantissa = (raw & 0x0FFF) as u32;
    let lsb_size_x100 = 1u32 << exponent;
    (mantissa * lsb_size_x100) / 100
}
