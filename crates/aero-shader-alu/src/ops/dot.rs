use crate::{Scalar, Vec4};

/// Sums `a[i] * b[i]` over the first `n` lanes, left to right, one rounding per operation.
fn dot(n: usize, saturate: bool, a: &Vec4, b: &Vec4) -> Scalar {
    let sum = (0..n).fold(0.0f32, |acc, i| acc + a[i].as_f32() * b[i].as_f32());
    Scalar::from_f32(sum, saturate)
}

/// `dp2[_sat]`: dot product of the `xy` lanes.
///
/// The dispatcher replicates the scalar into whichever destination lanes are written.
pub fn dp2(saturate: bool, a: &Vec4, b: &Vec4) -> Scalar {
    dot(2, saturate, a, b)
}

/// `dp3[_sat]`: dot product of the `xyz` lanes.
pub fn dp3(saturate: bool, a: &Vec4, b: &Vec4) -> Scalar {
    dot(3, saturate, a, b)
}

/// `dp4[_sat]`
pub fn dp4(saturate: bool, a: &Vec4, b: &Vec4) -> Scalar {
    dot(4, saturate, a, b)
}
