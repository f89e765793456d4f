use crate::{AluQuirks, Scalar, Vec4};

fn u32x4_binop(a: &Vec4, b: &Vec4, f: impl Fn(u32, u32) -> u32) -> Vec4 {
    a.zip_map(b, |x, y| Scalar::from_bits(f(x.as_u32(), y.as_u32())))
}

/// `and dst, a, b`
pub fn and(a: &Vec4, b: &Vec4) -> Vec4 {
    u32x4_binop(a, b, |x, y| x & y)
}

/// `xor dst, a, b` with the default quirks, which compute bitwise OR.
pub fn xor(a: &Vec4, b: &Vec4) -> Vec4 {
    xor_with(AluQuirks::default(), a, b)
}

/// `xor dst, a, b`. Computes OR when [`AluQuirks::XOR_IS_OR`] is set.
pub fn xor_with(quirks: AluQuirks, a: &Vec4, b: &Vec4) -> Vec4 {
    if quirks.contains(AluQuirks::XOR_IS_OR) {
        u32x4_binop(a, b, |x, y| x | y)
    } else {
        u32x4_binop(a, b, |x, y| x ^ y)
    }
}
