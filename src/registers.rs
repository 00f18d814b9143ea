//! Register definitions for the MCP9808
//!
//! The MCP9808 exposes eight registers selected through a one-byte register
//! pointer. Registers 0x01-0x07 are 16 bits wide, the resolution register
//! (0x08) is 8 bits wide. All multi-byte transfers are big-endian (MSB
//! first), per datasheet DS25095 section 5.1.
//!
//! Only the pointer range 0x01 (CONFIG) through 0x04 (T_CRIT) accepts raw
//! writes; see [`Register::is_writable`].

device_driver::create_device!(
    device_name: Mcp9808,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// CONFIG - Sensor configuration (0x01)
        ///
        /// Controls shutdown mode, the alert output pin and the limit
        /// hysteresis. The two lock bits can only be cleared by a power
        /// cycle once set.
        register Config {
            const ADDRESS = 0x01;
            const SIZE_BITS = 16;

            /// Alert output mode (false = comparator, true = interrupt)
            alert_mode: bool = 0,
            /// Alert output polarity (false = active-low, true = active-high)
            alert_polarity: bool = 1,
            /// Alert output select (false = all limits, true = critical only)
            alert_select: bool = 2,
            /// Alert output enable
            alert_control: bool = 3,
            /// Alert output status (read-only; asserted when the output pin
            /// is active)
            alert_status: bool = 4,
            /// Interrupt clear (self-clearing; only meaningful in interrupt
            /// mode)
            interrupt_clear: bool = 5,
            /// Window lock - freezes the upper and lower limit registers
            window_lock: bool = 6,
            /// Critical lock - freezes the critical limit register
            critical_lock: bool = 7,
            /// Shutdown mode (conversions stop, alert output deasserted)
            shutdown: bool = 8,
            /// Limit hysteresis (0 = 0.0C, 1 = 1.5C, 2 = 3.0C, 3 = 6.0C)
            hysteresis: uint = 9..11,
            reserved: uint = 11..16,
        },

        /// T_UPPER - Upper temperature limit (0x02)
        register UpperLimit {
            const ADDRESS = 0x02;
            const SIZE_BITS = 16;

            /// Signed 13-bit limit, 0.0625C LSB (the device ignores the two
            /// low bits, giving an effective 0.25C step)
            temperature: uint = 0..13,
            reserved: uint = 13..16,
        },

        /// T_LOWER - Lower temperature limit (0x03)
        register LowerLimit {
            const ADDRESS = 0x03;
            const SIZE_BITS = 16;

            /// Signed 13-bit limit, 0.0625C LSB
            temperature: uint = 0..13,
            reserved: uint = 13..16,
        },

        /// T_CRIT - Critical temperature limit (0x04)
        register CriticalLimit {
            const ADDRESS = 0x04;
            const SIZE_BITS = 16;

            /// Signed 13-bit limit, 0.0625C LSB
            temperature: uint = 0..13,
            reserved: uint = 13..16,
        },

        /// T_A - Ambient temperature (0x05, read-only)
        ///
        /// The three high bits report the live limit comparisons; the low
        /// 13 bits hold the signed temperature at 0.0625C per LSB.
        register AmbientTemp {
            const ADDRESS = 0x05;
            const SIZE_BITS = 16;

            /// Signed 13-bit temperature, 0.0625C LSB
            temperature: uint = 0..13,
            /// T_A below the lower limit
            below_lower: bool = 13,
            /// T_A above the upper limit
            above_upper: bool = 14,
            /// T_A at or above the critical limit
            critical: bool = 15,
        },

        /// MANUFACTURER ID (0x06, read-only)
        /// Expected value: 0x0054
        register ManufacturerId {
            const ADDRESS = 0x06;
            const SIZE_BITS = 16;

            /// Manufacturer ID (should read 0x0054)
            value: uint = 0..16,
        },

        /// DEVICE ID / REVISION (0x07, read-only)
        /// Expected device ID: 0x04
        register DeviceId {
            const ADDRESS = 0x07;
            const SIZE_BITS = 16;

            /// Silicon revision
            revision: uint = 0..8,
            /// Device ID (should read 0x04)
            device_id: uint = 8..16,
        },

        /// RESOLUTION - Conversion resolution (0x08)
        ///
        /// The only 8-bit register on the device.
        register Resolution {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            /// Resolution select (0 = 0.5C, 1 = 0.25C, 2 = 0.125C,
            /// 3 = 0.0625C)
            resolution: uint = 0..2,
            reserved: uint = 2..8,
        }
    }
);

/// MCP9808 register pointer values
///
/// Each register has a fixed width determined by its address, never by the
/// caller: see [`Register::size_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// CONFIG (0x01)
    Config,
    /// T_UPPER (0x02)
    UpperLimit,
    /// T_LOWER (0x03)
    LowerLimit,
    /// T_CRIT (0x04)
    CriticalLimit,
    /// T_A ambient temperature (0x05)
    AmbientTemp,
    /// Manufacturer ID (0x06)
    ManufacturerId,
    /// Device ID / revision (0x07)
    DeviceId,
    /// Conversion resolution (0x08)
    Resolution,
}

impl Register {
    /// Register pointer byte written to select this register
    pub const fn address(self) -> u8 {
        match self {
            Self::Config => 0x01,
            Self::UpperLimit => 0x02,
            Self::LowerLimit => 0x03,
            Self::CriticalLimit => 0x04,
            Self::AmbientTemp => 0x05,
            Self::ManufacturerId => 0x06,
            Self::DeviceId => 0x07,
            Self::Resolution => 0x08,
        }
    }

    /// Register width in bits (16 for 0x01-0x07, 8 for 0x08)
    pub const fn size_bits(self) -> u32 {
        match self {
            Self::Resolution => 8,
            _ => 16,
        }
    }

    /// Register width in bytes on the wire
    pub const fn width(self) -> usize {
        (self.size_bits() / 8) as usize
    }

    /// Whether the register accepts raw writes
    ///
    /// Only the pointer range 0x01 (CONFIG) through 0x04 (T_CRIT) is
    /// writable through the raw register path.
    pub const fn is_writable(self) -> bool {
        matches!(
            self,
            Self::Config | Self::UpperLimit | Self::LowerLimit | Self::CriticalLimit
        )
    }
}
