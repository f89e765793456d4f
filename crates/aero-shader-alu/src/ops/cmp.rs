use crate::{Scalar, Vec4};

fn f32x4_cmp(a: &Vec4, b: &Vec4, f: impl Fn(f32, f32) -> bool) -> Vec4 {
    a.zip_map(b, |x, y| Scalar::from_mask(f(x.as_f32(), y.as_f32())))
}

fn i32x4_cmp(a: &Vec4, b: &Vec4, f: impl Fn(i32, i32) -> bool) -> Vec4 {
    a.zip_map(b, |x, y| Scalar::from_mask(f(x.as_i32(), y.as_i32())))
}

/// `ge dst, a, b`: ordered `a >= b`, so NaN lanes compare false.
pub fn ge(a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_cmp(a, b, |x, y| x >= y)
}

/// `lt dst, a, b`: ordered `a < b`.
pub fn lt(a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_cmp(a, b, |x, y| x < y)
}

/// `ne dst, a, b`: unordered `a != b`, so NaN lanes compare true.
pub fn ne(a: &Vec4, b: &Vec4) -> Vec4 {
    f32x4_cmp(a, b, |x, y| x != y)
}

pub fn ige(a: &Vec4, b: &Vec4) -> Vec4 {
    i32x4_cmp(a, b, |x, y| x >= y)
}

pub fn ilt(a: &Vec4, b: &Vec4) -> Vec4 {
    i32x4_cmp(a, b, |x, y| x < y)
}

pub fn ine(a: &Vec4, b: &Vec4) -> Vec4 {
    i32x4_cmp(a, b, |x, y| x != y)
}
