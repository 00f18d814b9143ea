//! Alert flags and alert output configuration
//!
//! The ambient temperature register reports three live limit comparisons in
//! its top bits; [`AlertFlags`] models that bit field. The CONFIG register
//! routes those comparisons to the alert output pin; [`AlertConfig`] covers
//! the routing options.

use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Alert flag bits of the ambient temperature register
///
/// A mask over bits 15..13 of the register word. Flags combine with `|`:
///
/// ```
/// use mcp9808::AlertFlags;
///
/// let mask = AlertFlags::CRITICAL | AlertFlags::ABOVE_UPPER;
/// assert!(mask.contains(AlertFlags::CRITICAL));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertFlags(u16);

impl AlertFlags {
    /// No flags set
    pub const NONE: Self = Self(0);
    /// T_A at or above the critical limit (bit 15)
    pub const CRITICAL: Self = Self(0x8000);
    /// T_A above the upper limit (bit 14)
    pub const ABOVE_UPPER: Self = Self(0x4000);
    /// T_A below the lower limit (bit 13)
    pub const BELOW_LOWER: Self = Self(0x2000);
    /// All three flags
    pub const ALL: Self = Self(0xE000);

    /// Extract the flag bits from an ambient temperature register word
    pub const fn from_word(word: u16) -> Self {
        Self(word & Self::ALL.0)
    }

    /// Raw flag bits at their register positions
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every flag in `other` is also set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag in `other` is set in `self`
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AlertFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AlertFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AlertFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Alert output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertMode {
    /// Comparator output - the pin tracks the limit comparison (default)
    #[default]
    Comparator,
    /// Interrupt output - the pin latches until the interrupt is cleared
    Interrupt,
}

/// Alert output polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPolarity {
    /// Active-low, requires a pull-up resistor (default)
    #[default]
    ActiveLow,
    /// Active-high
    ActiveHigh,
}

/// Which limit comparisons drive the alert output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertSelect {
    /// Window and critical limits (default)
    #[default]
    All,
    /// Critical limit only
    CriticalOnly,
}

/// Alert output pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertConfig {
    /// Enable the alert output pin
    pub enabled: bool,
    /// Comparator or interrupt output
    pub mode: AlertMode,
    /// Output polarity
    pub polarity: AlertPolarity,
    /// Limit comparisons routed to the pin
    pub select: AlertSelect,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: AlertMode::Comparator,
            polarity: AlertPolarity::ActiveLow,
            select: AlertSelect::All,
        }
    }
}

impl AlertConfig {
    /// Comparator-mode alert on all limits, active-low
    pub const fn comparator() -> Self {
        Self {
            enabled: true,
            mode: AlertMode::Comparator,
            polarity: AlertPolarity::ActiveLow,
            select: AlertSelect::All,
        }
    }

    /// Interrupt-mode alert on all limits, active-low
    pub const fn interrupt() -> Self {
        Self {
            enabled: true,
            mode: AlertMode::Interrupt,
            polarity: AlertPolarity::ActiveLow,
            select: AlertSelect::All,
        }
    }
}
