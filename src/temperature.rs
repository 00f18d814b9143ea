//! Temperature word encoding and decoding
//!
//! The ambient and limit registers share one 13-bit two's-complement format
//! with an LSB of 0.0625 C. In the ambient register the top three bits carry
//! the live alert flags, so the flag bits must be masked out before the sign
//! bit (bit 12) is extended.

/// Physical value of one LSB of the temperature registers, in degrees
/// Celsius
pub const LSB_CELSIUS: f32 = 0.0625;

/// Bit width of the temperature field
pub const VALUE_BITS: u32 = 13;

/// Mask selecting the 13-bit temperature field of a register word
pub const VALUE_MASK: u16 = 0x1FFF;

/// Smallest raw value representable in the 13-bit field
pub const RAW_MIN: i32 = -4096;

/// Largest raw value representable in the 13-bit field
pub const RAW_MAX: i32 = 4095;

/// Decode a two's-complement value of arbitrary bit width
///
/// If the sign bit (bit `bits - 1`) is set, the full modulus `2^bits` is
/// subtracted; otherwise the value passes through unchanged. `bits` must be
/// in `1..=31` and `unsigned` must fit in `bits` bits.
pub const fn to_signed(unsigned: u32, bits: u32) -> i32 {
    if unsigned & (1 << (bits - 1)) != 0 {
        unsigned as i32 - (1 << bits)
    } else {
        unsigned as i32
    }
}

/// Encode a signed value as two's complement of arbitrary bit width
///
/// Inverse of [`to_signed`]: negative values are wrapped by adding the full
/// modulus `2^bits`. `signed` must be in `-(2^(bits-1))..2^(bits-1)`.
pub const fn from_signed(signed: i32, bits: u32) -> u32 {
    (signed as u32) & ((1 << bits) - 1)
}

/// Decode an ambient or limit register word into degrees Celsius
///
/// Masks out the flag bits, sign-extends the 13-bit field and scales by the
/// 0.0625 C LSB.
pub fn decode_celsius(word: u16) -> f32 {
    let magnitude = u32::from(word & VALUE_MASK);
    to_signed(magnitude, VALUE_BITS) as f32 * LSB_CELSIUS
}

/// Encode a temperature in degrees Celsius as a limit register word
///
/// The value is rounded to the nearest 0.0625 C step, then the two low bits
/// are cleared because the limit comparators ignore them (effective limit
/// step: 0.25 C). Returns `None` when the temperature does not fit the
/// 13-bit field (beyond roughly +-256 C).
pub fn encode_limit(celsius: f32) -> Option<u16> {
    let steps = celsius / LSB_CELSIUS;
    // Round half away from zero; f32::round is unavailable in core
    let raw = if steps >= 0.0 {
        (steps + 0.5) as i32
    } else {
        (steps - 0.5) as i32
    };
    if raw < RAW_MIN || raw > RAW_MAX {
        return None;
    }
    Some(from_signed(raw, VALUE_BITS) as u16 & !0b11)
}
