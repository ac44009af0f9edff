//! OPT3001 Rust Driver
//!
//! Platform-agnostic driver for the TI OPT3001 ambient light sensor, built
//! on the `embedded-hal` 1.x I2C and delay traits. The driver verifies the
//! device identity, triggers single-shot conversions, polls the
//! conversion-ready flag with a bounded budget, and decodes the
//! exponent/mantissa result register into integer lux.
//!
//! The blocking API is the default; enabling the `async` feature adds an
//! `embedded-hal-async` mirror of every operation, and the `defmt` feature
//! derives `defmt::Format` on the public types.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use driver::Opt3001;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
