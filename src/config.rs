//! Sensor configuration values: limit hysteresis and conversion resolution

/// Limit hysteresis applied to the window and critical comparisons
///
/// Encoded in bits 9..11 of the CONFIG register. Hysteresis applies on
/// falling temperature only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hysteresis {
    /// 0.0 C (default)
    #[default]
    Deg0_0 = 0,
    /// 1.5 C
    Deg1_5 = 1,
    /// 3.0 C
    Deg3_0 = 2,
    /// 6.0 C
    Deg6_0 = 3,
}

impl Hysteresis {
    /// Hysteresis in degrees Celsius
    pub const fn celsius(self) -> f32 {
        match self {
            Self::Deg0_0 => 0.0,
            Self::Deg1_5 => 1.5,
            Self::Deg3_0 => 3.0,
            Self::Deg6_0 => 6.0,
        }
    }

    /// CONFIG register field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Deg0_0,
            1 => Self::Deg1_5,
            2 => Self::Deg3_0,
            _ => Self::Deg6_0,
        }
    }
}

/// Conversion resolution
///
/// Encoded in the low two bits of the resolution register (0x08). Finer
/// resolution lengthens the conversion time, from 30 ms at 0.5 C up to
/// 250 ms at 0.0625 C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 0.5 C, 30 ms conversion time
    Deg0_5 = 0,
    /// 0.25 C, 65 ms conversion time
    Deg0_25 = 1,
    /// 0.125 C, 130 ms conversion time
    Deg0_125 = 2,
    /// 0.0625 C, 250 ms conversion time (power-on default)
    #[default]
    Deg0_0625 = 3,
}

impl Resolution {
    /// Resolution in degrees Celsius per LSB
    pub const fn celsius(self) -> f32 {
        match self {
            Self::Deg0_5 => 0.5,
            Self::Deg0_25 => 0.25,
            Self::Deg0_125 => 0.125,
            Self::Deg0_0625 => 0.0625,
        }
    }

    /// Typical conversion time in milliseconds
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            Self::Deg0_5 => 30,
            Self::Deg0_25 => 65,
            Self::Deg0_125 => 130,
            Self::Deg0_0625 => 250,
        }
    }

    /// Resolution register field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::Deg0_5,
            1 => Self::Deg0_25,
            2 => Self::Deg0_125,
            _ => Self::Deg0_0625,
        }
    }
}
