#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod alert;
pub mod config;
pub mod device;
pub mod interface;
pub mod registers;
pub mod temperature;

// Re-export main types
pub use alert::{AlertConfig, AlertFlags, AlertMode, AlertPolarity, AlertSelect};
pub use config::{Hysteresis, Resolution};
pub use device::{AmbientReading, Mcp9808Driver};
pub use interface::I2cInterface;
pub use registers::Register;

/// MCP9808 I2C address with A2/A1/A0 pins low (default: 0x18)
///
/// The three address pins select one of eight consecutive addresses
/// (0x18-0x1F). Most breakout boards pull all three low. Use
/// [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_DEFAULT: u8 = 0x18;

/// Expected value of the manufacturer ID register (0x06)
pub const MANUFACTURER_ID_VALUE: u16 = 0x0054;

/// Expected device ID (upper byte of register 0x07; the lower byte is the
/// silicon revision)
pub const DEVICE_ID_VALUE: u8 = 0x04;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Manufacturer/device ID registers contained an unexpected value
    /// (contains the manufacturer ID word actually read)
    InvalidDevice(u16),
    /// Attempted to write a register outside the writable range 0x01-0x04
    ReadOnlyRegister(Register),
    /// Configuration value out of range (e.g. a temperature limit the
    /// 13-bit register format cannot represent)
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
