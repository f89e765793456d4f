use crate::{AluQuirks, Lane, Scalar, Vec4};

fn f32x4_unop(saturate: bool, v: &Vec4, f: impl Fn(f32) -> f32) -> Vec4 {
    v.map(|x| Scalar::from_f32(f(x.as_f32()), saturate))
}

fn f32x4_binop(saturate: bool, a: &Vec4, b: &Vec4, f: impl Fn(f32, f32) -> f32) -> Vec4 {
    a.zip_map(b, |x, y| Scalar::from_f32(f(x.as_f32(), y.as_f32()), saturate))
}

fn i32x4_binop(a: &Vec4, b: &Vec4, f: impl Fn(i32, i32) -> i32) -> Vec4 {
    a.zip_map(b, |x, y| Scalar::from_i32(f(x.as_i32(), y.as_i32())))
}

/// src1 as seen by the multiply in `mad`/`imad`.
fn mad_multiplier(quirks: AluQuirks, b: &Vec4) -> Vec4 {
    if quirks.contains(AluQuirks::MAD_SRC1_LANE_X) {
        Vec4::splat(b.lane(Lane::X))
    } else {
        *b
    }
}

/// `mov[_sat] dst, src`
///
/// Without `_sat` the lanes are copied untouched, NaN payloads included. With `_sat` the
/// saturated `x` lane of `src` is written to all four lanes.
pub fn mov(saturate: bool, src: &Vec4) -> Vec4 {
    if saturate {
        Vec4::splat(Scalar::from_f32(src.lane(Lane::X).as_f32(), true))
    } else {
        *src
    }
}

/// `add[_sat] dst, a, b`
pub fn add(saturate: bool, a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_binop(saturate, a, b, |x, y| x + y)
}

/// `div[_sat] dst, a, b`. Division by zero yields IEEE infinities/NaN.
pub fn div(saturate: bool, a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_binop(saturate, a, b, |x, y| x / y)
}

/// `mul[_sat] dst, a, b`
pub fn mul(saturate: bool, a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_binop(saturate, a, b, |x, y| x * y)
}

/// `mad[_sat] dst, a, b, c` with the default quirks.
pub fn mad(saturate: bool, a: &Vec4, b: &Vec4, c: &Vec4) -> Vec4 {
    mad_with(AluQuirks::default(), saturate, a, b, c)
}

/// `mad[_sat] dst, a, b, c`: `a * b + c` per lane, rounded after the multiply and again after
/// the add (not fused).
pub fn mad_with(quirks: AluQuirks, saturate: bool, a: &Vec4, b: &Vec4, c: &Vec4) -> Vec4 {
    let b = mad_multiplier(quirks, b);
    a.zip3_map(&b, c, |x, y, z| {
        Scalar::from_f32(x.as_f32() * y.as_f32() + z.as_f32(), saturate)
    })
}

/// `iadd dst, a, b` (two's-complement wraparound).
pub fn iadd(a: &Vec4, b: &Vec4) -> Vec4 {
    i32x4_binop(a, b, i32::wrapping_add)
}

/// `imad dst, a, b, c` with the default quirks.
pub fn imad(a: &Vec4, b: &Vec4, c: &Vec4) -> Vec4 {
    imad_with(AluQuirks::default(), a, b, c)
}

pub fn imad_with(quirks: AluQuirks, a: &Vec4, b: &Vec4, c: &Vec4) -> Vec4 {
    let b = mad_multiplier(quirks, b);
    a.zip3_map(&b, c, |x, y, z| {
        Scalar::from_i32(x.as_i32().wrapping_mul(y.as_i32()).wrapping_add(z.as_i32()))
    })
}

/// `rsq[_sat] dst, src`: `1 / sqrt(x)`.
pub fn rsq(saturate: bool, src: &Vec4) -> Vec4 {
    f32x4_unop(saturate, src, |x| 1.0 / x.sqrt())
}

/// `sqrt[_sat] dst, src`
pub fn sqrt(saturate: bool, src: &Vec4) -> Vec4 {
    f32x4_unop(saturate, src, f32::sqrt)
}
