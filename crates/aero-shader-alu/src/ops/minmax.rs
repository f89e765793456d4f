use crate::{Scalar, Vec4};

// `max` picks `a` on `>=` while `min` picks `a` only on `<`. For any ordered pair this makes
// `min(a, b) == a` exactly when `max(a, b) == b`, which the optimizer relies on.

/// `max[_sat] dst, a, b`: `a >= b ? a : b`. A NaN in either operand selects `b`.
pub fn max(saturate: bool, a: &Vec4, b: &Vec4) -> Vec4 {
    a.zip_map(b, |x, y| {
        let (x, y) = (x.as_f32(), y.as_f32());
        Scalar::from_f32(if x >= y { x } else { y }, saturate)
    })
}

/// `min[_sat] dst, a, b`: `a < b ? a : b`. A NaN in either operand selects `b`.
pub fn min(saturate: bool, a: &Vec4, b: &Vec4) -> Vec4 {
    a.zip_map(b, |x, y| {
        let (x, y) = (x.as_f32(), y.as_f32());
        Scalar::from_f32(if x < y { x } else { y }, saturate)
    })
}

/// `imin dst, a, b` (signed).
pub fn imin(a: &Vec4, b: &Vec4) -> Vec4 {
    a.zip_map(b, |x, y| if x.as_i32() < y.as_i32() { x } else { y })
}
