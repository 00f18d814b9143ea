//! High-level driver API for the MCP9808
//!
//! This module provides a user-friendly interface to the MCP9808 sensor:
//! temperature readings, alert limit configuration and raw register access.

use crate::alert::{AlertConfig, AlertFlags, AlertMode, AlertPolarity, AlertSelect};
use crate::config::{Hysteresis, Resolution};
use crate::registers::{Mcp9808 as RegisterDevice, Register};
use crate::temperature;
use crate::{Error, DEVICE_ID_VALUE, MANUFACTURER_ID_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;

/// One ambient temperature reading
///
/// The sensor reports the live limit comparisons in the same register word
/// as the temperature, so both come from a single bus read.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AmbientReading {
    /// Measured temperature in degrees Celsius
    pub celsius: f32,
    /// Limit comparison flags sampled with the measurement
    pub alerts: AlertFlags,
}

impl AmbientReading {
    /// Decode an ambient temperature register word
    pub fn from_word(word: u16) -> Self {
        Self {
            celsius: temperature::decode_celsius(word),
            alerts: AlertFlags::from_word(word),
        }
    }
}

/// Main driver for the MCP9808
///
/// Owns the bus interface for its lifetime and caches nothing: every
/// operation is a fresh register transaction. The driver performs no
/// internal locking; callers needing concurrent access must serialize
/// externally.
pub struct Mcp9808Driver<I> {
    device: RegisterDevice<I>,
}

#[cfg(not(feature = "async"))]
impl<I> Mcp9808Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new MCP9808 driver instance
    ///
    /// Verifies the manufacturer and device ID registers. The sensor powers
    /// up in continuous conversion mode, so no further initialization is
    /// required before reading temperatures.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The ID registers contain unexpected values
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self { device };

        let manufacturer = driver.manufacturer_id()?;
        let (device_id, _revision) = driver.device_id()?;
        if manufacturer != MANUFACTURER_ID_VALUE || device_id != DEVICE_ID_VALUE {
            return Err(Error::InvalidDevice(manufacturer));
        }

        Ok(driver)
    }

    /// Read the manufacturer ID register
    ///
    /// Should return 0x0054 for a valid MCP9808.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn manufacturer_id(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.manufacturer_id().read()?;
        let value: u16 = reg.value().into();
        Ok(value)
    }

    /// Read the device ID register
    ///
    /// Returns `(device_id, revision)`; the device ID should be 0x04.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn device_id(&mut self) -> Result<(u8, u8), Error<I::Error>> {
        let reg = self.device.device_id().read()?;
        let id: u16 = reg.device_id().into();
        let revision: u16 = reg.revision().into();
        Ok((id as u8, revision as u8))
    }

    /// Read a register as a raw big-endian word
    ///
    /// Issues a register pointer write followed by a read sized to the
    /// register width (2 bytes for 0x01-0x07, 1 byte for 0x08). For the
    /// 8-bit resolution register the byte lands in the low half of the
    /// returned word. No retry is attempted on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        let width = register.width();
        self.device
            .interface
            .read_register(register.address(), register.size_bits(), &mut buffer[..width])?;

        Ok(if width == 1 {
            u16::from(buffer[0])
        } else {
            u16::from_be_bytes([buffer[0], buffer[1]])
        })
    }

    /// Write a raw word to a register
    ///
    /// Only CONFIG (0x01) through T_CRIT (0x04) accept raw writes; any
    /// other register fails with [`Error::ReadOnlyRegister`] before any bus
    /// activity. The write is a single transaction of pointer byte plus
    /// data bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyRegister`] for registers outside 0x01-0x04,
    /// or a bus error if the transaction fails.
    pub fn write_register(&mut self, register: Register, value: u16) -> Result<(), Error<I::Error>> {
        if !register.is_writable() {
            return Err(Error::ReadOnlyRegister(register));
        }

        let bytes = value.to_be_bytes();
        self.device
            .interface
            .write_register(register.address(), register.size_bits(), &bytes)?;
        Ok(())
    }

    /// Read the ambient temperature in degrees Celsius
    ///
    /// Masks the alert flag bits out of the register word, sign-extends the
    /// 13-bit field and scales by the 0.0625 C LSB.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp)?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read the ambient temperature together with the live alert flags
    ///
    /// Both come from the same register word, so this is a single bus
    /// transaction like [`read_temperature`](Self::read_temperature).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_ambient(&mut self) -> Result<AmbientReading, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp)?;
        Ok(AmbientReading::from_word(word))
    }

    /// Check the live alert flags against a requested mask
    ///
    /// With `strict` set, returns true only when every requested flag is
    /// set on the device (extra device flags are permitted). Without
    /// `strict`, returns true when any requested flag is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn check_alert_flags(
        &mut self,
        flags: AlertFlags,
        strict: bool,
    ) -> Result<bool, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp)?;
        let device_flags = AlertFlags::from_word(word);

        Ok(if strict {
            device_flags.contains(flags)
        } else {
            device_flags.intersects(flags)
        })
    }

    /// Set the upper temperature limit in degrees Celsius
    ///
    /// The value is quantized to the sensor's 0.25 C limit step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub fn set_upper_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::UpperLimit, word)
    }

    /// Set the lower temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub fn set_lower_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::LowerLimit, word)
    }

    /// Set the critical temperature limit in degrees Celsius
    ///
    /// The critical flag asserts when the ambient temperature reaches or
    /// exceeds this limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub fn set_critical_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::CriticalLimit, word)
    }

    /// Set the upper and lower temperature window
    ///
    /// The window flags assert when the ambient temperature leaves the
    /// range `lower..=upper`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either limit is out of range or
    /// the window is inverted, or a bus error if a write fails.
    pub fn set_temperature_window(
        &mut self,
        upper: f32,
        lower: f32,
    ) -> Result<(), Error<I::Error>> {
        if lower > upper {
            return Err(Error::InvalidConfig);
        }
        self.set_upper_limit(upper)?;
        self.set_lower_limit(lower)
    }

    /// Read back the upper temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn upper_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::UpperLimit)?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read back the lower temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn lower_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::LowerLimit)?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read back the critical temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn critical_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::CriticalLimit)?;
        Ok(temperature::decode_celsius(word))
    }

    /// Configure the alert output pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_alerts(&mut self, config: AlertConfig) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_alert_control(config.enabled);
            w.set_alert_mode(matches!(config.mode, AlertMode::Interrupt));
            w.set_alert_polarity(matches!(config.polarity, AlertPolarity::ActiveHigh));
            w.set_alert_select(matches!(config.select, AlertSelect::CriticalOnly));
        })?;
        Ok(())
    }

    /// Read back the alert output configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn alert_config(&mut self) -> Result<AlertConfig, Error<I::Error>> {
        let reg = self.device.config().read()?;
        Ok(AlertConfig {
            enabled: reg.alert_control(),
            mode: if reg.alert_mode() {
                AlertMode::Interrupt
            } else {
                AlertMode::Comparator
            },
            polarity: if reg.alert_polarity() {
                AlertPolarity::ActiveHigh
            } else {
                AlertPolarity::ActiveLow
            },
            select: if reg.alert_select() {
                AlertSelect::CriticalOnly
            } else {
                AlertSelect::All
            },
        })
    }

    /// Whether the alert output pin is currently asserted
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn alert_output_asserted(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.config().read()?;
        Ok(reg.alert_status())
    }

    /// Clear a pending interrupt (interrupt output mode only)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn clear_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_interrupt_clear(true);
        })?;
        Ok(())
    }

    /// Enter or leave shutdown mode
    ///
    /// In shutdown the sensor stops converting and the alert output is
    /// deasserted; registers stay readable.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_shutdown(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_shutdown(enable);
        })?;
        Ok(())
    }

    /// Set the limit hysteresis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_hysteresis(&mut self, hysteresis: Hysteresis) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_hysteresis(hysteresis.bits().into());
        })?;
        Ok(())
    }

    /// Read back the limit hysteresis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn hysteresis(&mut self) -> Result<Hysteresis, Error<I::Error>> {
        let reg = self.device.config().read()?;
        Ok(Hysteresis::from_bits(reg.hysteresis().into()))
    }

    /// Lock the upper and lower limit registers until power cycle
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn lock_temperature_window(&mut self) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_window_lock(true);
        })?;
        Ok(())
    }

    /// Lock the critical limit register until power cycle
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn lock_critical_limit(&mut self) -> Result<(), Error<I::Error>> {
        self.device.config().modify(|w| {
            w.set_critical_lock(true);
        })?;
        Ok(())
    }

    /// Set the conversion resolution
    ///
    /// The resolution register sits outside the raw-writable pointer range,
    /// so it is written through the typed register map.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<I::Error>> {
        self.device.resolution().modify(|w| {
            w.set_resolution(resolution.bits().into());
        })?;
        Ok(())
    }

    /// Read back the conversion resolution
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn resolution(&mut self) -> Result<Resolution, Error<I::Error>> {
        let reg = self.device.resolution().read()?;
        Ok(Resolution::from_bits(reg.resolution().into()))
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for
    /// advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}

#[cfg(feature = "async")]
impl<I> Mcp9808Driver<I>
where
    I: AsyncRegisterInterface<AddressType = u8>,
{
    /// Create a new MCP9808 driver instance
    ///
    /// Verifies the manufacturer and device ID registers. The sensor powers
    /// up in continuous conversion mode, so no further initialization is
    /// required before reading temperatures.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The ID registers contain unexpected values
    pub async fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self { device };

        let manufacturer = driver.manufacturer_id().await?;
        let (device_id, _revision) = driver.device_id().await?;
        if manufacturer != MANUFACTURER_ID_VALUE || device_id != DEVICE_ID_VALUE {
            return Err(Error::InvalidDevice(manufacturer));
        }

        Ok(driver)
    }

    /// Read the manufacturer ID register
    ///
    /// Should return 0x0054 for a valid MCP9808.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn manufacturer_id(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.manufacturer_id().read_async().await?;
        let value: u16 = reg.value().into();
        Ok(value)
    }

    /// Read the device ID register
    ///
    /// Returns `(device_id, revision)`; the device ID should be 0x04.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn device_id(&mut self) -> Result<(u8, u8), Error<I::Error>> {
        let reg = self.device.device_id().read_async().await?;
        let id: u16 = reg.device_id().into();
        let revision: u16 = reg.revision().into();
        Ok((id as u8, revision as u8))
    }

    /// Read a register as a raw big-endian word
    ///
    /// Issues a register pointer write followed by a read sized to the
    /// register width (2 bytes for 0x01-0x07, 1 byte for 0x08).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_register(&mut self, register: Register) -> Result<u16, Error<I::Error>> {
        let mut buffer = [0u8; 2];
        let width = register.width();
        self.device
            .interface
            .read_register(register.address(), register.size_bits(), &mut buffer[..width])
            .await?;

        Ok(if width == 1 {
            u16::from(buffer[0])
        } else {
            u16::from_be_bytes([buffer[0], buffer[1]])
        })
    }

    /// Write a raw word to a register
    ///
    /// Only CONFIG (0x01) through T_CRIT (0x04) accept raw writes; any
    /// other register fails with [`Error::ReadOnlyRegister`] before any bus
    /// activity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyRegister`] for registers outside 0x01-0x04,
    /// or a bus error if the transaction fails.
    pub async fn write_register(
        &mut self,
        register: Register,
        value: u16,
    ) -> Result<(), Error<I::Error>> {
        if !register.is_writable() {
            return Err(Error::ReadOnlyRegister(register));
        }

        let bytes = value.to_be_bytes();
        self.device
            .interface
            .write_register(register.address(), register.size_bits(), &bytes)
            .await?;
        Ok(())
    }

    /// Read the ambient temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp).await?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read the ambient temperature together with the live alert flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_ambient(&mut self) -> Result<AmbientReading, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp).await?;
        Ok(AmbientReading::from_word(word))
    }

    /// Check the live alert flags against a requested mask
    ///
    /// With `strict` set, returns true only when every requested flag is
    /// set on the device (extra device flags are permitted). Without
    /// `strict`, returns true when any requested flag is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn check_alert_flags(
        &mut self,
        flags: AlertFlags,
        strict: bool,
    ) -> Result<bool, Error<I::Error>> {
        let word = self.read_register(Register::AmbientTemp).await?;
        let device_flags = AlertFlags::from_word(word);

        Ok(if strict {
            device_flags.contains(flags)
        } else {
            device_flags.intersects(flags)
        })
    }

    /// Set the upper temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub async fn set_upper_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::UpperLimit, word).await
    }

    /// Set the lower temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub async fn set_lower_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::LowerLimit, word).await
    }

    /// Set the critical temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the limit is outside the
    /// representable range, or a bus error if the write fails.
    pub async fn set_critical_limit(&mut self, celsius: f32) -> Result<(), Error<I::Error>> {
        let word = temperature::encode_limit(celsius).ok_or(Error::InvalidConfig)?;
        self.write_register(Register::CriticalLimit, word).await
    }

    /// Set the upper and lower temperature window
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either limit is out of range or
    /// the window is inverted, or a bus error if a write fails.
    pub async fn set_temperature_window(
        &mut self,
        upper: f32,
        lower: f32,
    ) -> Result<(), Error<I::Error>> {
        if lower > upper {
            return Err(Error::InvalidConfig);
        }
        self.set_upper_limit(upper).await?;
        self.set_lower_limit(lower).await
    }

    /// Read back the upper temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn upper_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::UpperLimit).await?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read back the lower temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn lower_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::LowerLimit).await?;
        Ok(temperature::decode_celsius(word))
    }

    /// Read back the critical temperature limit in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn critical_limit(&mut self) -> Result<f32, Error<I::Error>> {
        let word = self.read_register(Register::CriticalLimit).await?;
        Ok(temperature::decode_celsius(word))
    }

    /// Configure the alert output pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_alerts(&mut self, config: AlertConfig) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_alert_control(config.enabled);
                w.set_alert_mode(matches!(config.mode, AlertMode::Interrupt));
                w.set_alert_polarity(matches!(config.polarity, AlertPolarity::ActiveHigh));
                w.set_alert_select(matches!(config.select, AlertSelect::CriticalOnly));
            })
            .await?;
        Ok(())
    }

    /// Read back the alert output configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn alert_config(&mut self) -> Result<AlertConfig, Error<I::Error>> {
        let reg = self.device.config().read_async().await?;
        Ok(AlertConfig {
            enabled: reg.alert_control(),
            mode: if reg.alert_mode() {
                AlertMode::Interrupt
            } else {
                AlertMode::Comparator
            },
            polarity: if reg.alert_polarity() {
                AlertPolarity::ActiveHigh
            } else {
                AlertPolarity::ActiveLow
            },
            select: if reg.alert_select() {
                AlertSelect::CriticalOnly
            } else {
                AlertSelect::All
            },
        })
    }

    /// Whether the alert output pin is currently asserted
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn alert_output_asserted(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.config().read_async().await?;
        Ok(reg.alert_status())
    }

    /// Clear a pending interrupt (interrupt output mode only)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn clear_interrupt(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_interrupt_clear(true);
            })
            .await?;
        Ok(())
    }

    /// Enter or leave shutdown mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_shutdown(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_shutdown(enable);
            })
            .await?;
        Ok(())
    }

    /// Set the limit hysteresis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_hysteresis(&mut self, hysteresis: Hysteresis) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_hysteresis(hysteresis.bits().into());
            })
            .await?;
        Ok(())
    }

    /// Read back the limit hysteresis
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn hysteresis(&mut self) -> Result<Hysteresis, Error<I::Error>> {
        let reg = self.device.config().read_async().await?;
        Ok(Hysteresis::from_bits(reg.hysteresis().into()))
    }

    /// Lock the upper and lower limit registers until power cycle
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn lock_temperature_window(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_window_lock(true);
            })
            .await?;
        Ok(())
    }

    /// Lock the critical limit register until power cycle
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn lock_critical_limit(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .config()
            .modify_async(|w| {
                w.set_critical_lock(true);
            })
            .await?;
        Ok(())
    }

    /// Set the conversion resolution
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error<I::Error>> {
        self.device
            .resolution()
            .modify_async(|w| {
                w.set_resolution(resolution.bits().into());
            })
            .await?;
        Ok(())
    }

    /// Read back the conversion resolution
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn resolution(&mut self) -> Result<Resolution, Error<I::Error>> {
        let reg = self.device.resolution().read_async().await?;
        Ok(Resolution::from_bits(reg.resolution().into()))
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for
    /// advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
