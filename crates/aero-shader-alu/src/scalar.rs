//! A single 32-bit register lane.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// One 32-bit register lane.
///
/// The lane has exactly one physical representation: its raw bits. [`Scalar::as_f32`],
/// [`Scalar::as_i32`] and [`Scalar::as_u32`] are reinterpretations of those bits and never do
/// numeric conversion. Only [`Scalar::from_f32`] with `saturate` set changes the value it is
/// given.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Scalar(u32);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0);
    /// All bits set; the "true" value of a comparison mask.
    pub const TRUE_MASK: Scalar = Scalar(0xFFFF_FFFF);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Stores the two's-complement bit pattern of `value` unchanged.
    pub const fn from_i32(value: i32) -> Self {
        Self(value as u32)
    }

    /// Stores `value`, clamped to `[0.0, 1.0]` first when `saturate` is set.
    pub fn from_f32(value: f32, saturate: bool) -> Self {
        let value = if saturate { self::saturate(value) } else { value };
        Self(value.to_bits())
    }

    /// Comparison result: [`Scalar::TRUE_MASK`] or [`Scalar::ZERO`].
    pub const fn from_mask(cond: bool) -> Self {
        if cond {
            Self::TRUE_MASK
        } else {
            Self::ZERO
        }
    }

    pub fn as_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Clamps to `[0.0, 1.0]` as `max(0.0, min(1.0, x))`.
///
/// `f32::min`/`f32::max` return the non-NaN operand, so NaN saturates to `1.0`.
pub fn saturate(x: f32) -> f32 {
    0.0f32.max(1.0f32.min(x))
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x} ({:?})", self.0, self.as_f32())
    }
}

impl From<u32> for Scalar {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_alias_the_same_bits() {
        let s = Scalar::from_bits(0xBF80_0000);
        assert_eq!(s.as_f32(), -1.0);
        assert_eq!(s.as_i32(), -1_082_130_432);
        assert_eq!(s.as_u32(), 0xBF80_0000);

        let s = Scalar::from_i32(-1);
        assert_eq!(s.as_u32(), 0xFFFF_FFFF);
        assert!(s.as_f32().is_nan());
    }

    #[test]
    fn from_f32_keeps_bits_without_saturate() {
        for v in [-3.5f32, 0.0, -0.0, 2.0, f32::INFINITY, f32::MIN_POSITIVE] {
            assert_eq!(Scalar::from_f32(v, false).as_u32(), v.to_bits());
        }
        let nan = f32::from_bits(0x7FC0_1234);
        assert_eq!(Scalar::from_f32(nan, false).as_u32(), 0x7FC0_1234);
    }

    #[test]
    fn from_f32_saturates_before_capturing_bits() {
        assert_eq!(Scalar::from_f32(1.5, true).as_f32(), 1.0);
        assert_eq!(Scalar::from_f32(-2.0, true).as_f32(), 0.0);
        assert_eq!(Scalar::from_f32(0.25, true).as_f32(), 0.25);
        assert_eq!(Scalar::from_f32(f32::NEG_INFINITY, true).as_f32(), 0.0);
        assert_eq!(Scalar::from_f32(f32::INFINITY, true).as_f32(), 1.0);
    }

    #[test]
    fn saturate_nan_goes_to_one() {
        assert_eq!(saturate(f32::NAN), 1.0);
    }

    #[test]
    fn mask_values() {
        assert_eq!(Scalar::from_mask(true).as_u32(), 0xFFFF_FFFF);
        assert_eq!(Scalar::from_mask(false).as_u32(), 0);
    }

    #[test]
    fn debug_shows_hex_bits() {
        assert_eq!(format!("{:?}", Scalar::from_f32(1.0, false)), "0x3f800000 (1.0)");
    }
}
