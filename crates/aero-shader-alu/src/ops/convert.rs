//! Numeric conversions between the float and integer views of a lane.
//!
//! Unlike reading a lane through a different view, these compute a new bit pattern.

use tracing::trace;

use crate::{Scalar, Vec4};

// Bounds applied before truncation. They are not representable in f32 (both round to
// +/-2^31), so the clamp happens in f64 where truncation lands inside the i32 range.
const FTOI_MIN: f64 = -2_147_483_648.999;
const FTOI_MAX: f64 = 2_147_483_647.999;

/// Truncates toward zero after clamping to the int32 range. NaN converts to 0.
fn f32_to_i32_clamped(x: f32) -> i32 {
    if x.is_nan() {
        trace!(
            target: "aero_shader_alu::convert",
            bits = format_args!("0x{:08x}", x.to_bits()),
            "NaN float->int conversion produces 0"
        );
        return 0;
    }

    let wide = f64::from(x);
    let clamped = wide.clamp(FTOI_MIN, FTOI_MAX);
    if clamped != wide {
        trace!(
            target: "aero_shader_alu::convert",
            value = x,
            "float->int conversion clamped to int32 range"
        );
    }
    clamped.trunc() as i32
}

/// `ftoi dst, src`
pub fn ftoi(src: &Vec4) -> Vec4 {
    src.map(|x| Scalar::from_i32(f32_to_i32_clamped(x.as_f32())))
}

/// `ftou dst, src`
///
/// Uses the same int32 clamp as [`ftoi`]; the clamped integer's bit pattern is stored, so a
/// large negative input yields `0x8000_0000`.
/// Negative inputs wrap through the int32 bit pattern: `-1.5` stores `0xFFFF_FFFF`.
pub fn ftou(src: &Vec4) -> Vec4 {
    src.map(|x| Scalar::from_bits(f32_to_i32_clamped(x.as_f32()) as u32))
}

/// `itof dst, src`: signed int to float, round to nearest even.
pub fn itof(src: &Vec4) -> Vec4 {
    src.map(|x| Scalar::from_f32(x.as_i32() as f32, false))
}

/// `utof dst, src`: unsigned int to float, round to nearest even.
pub fn utof(src: &Vec4) -> Vec4 {
    src.map(|x| Scalar::from_f32(x.as_u32() as f32, false))
}
