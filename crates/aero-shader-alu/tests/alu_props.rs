#![cfg(not(target_arch = "wasm32"))]

use aero_shader_alu::ops;
use aero_shader_alu::{Scalar, Vec4};
use proptest::prelude::*;

fn any_vec4() -> impl Strategy<Value = Vec4> {
    any::<[u32; 4]>().prop_map(Vec4::from_bits)
}

fn ordered_f32() -> impl Strategy<Value = f32> {
    // Every non-NaN float, infinities and signed zeros included.
    prop_oneof![
        8 => any::<f32>().prop_filter("NaN is unordered", |x| !x.is_nan()),
        1 => Just(0.0f32),
        1 => Just(-0.0f32),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

fn ordered_vec4() -> impl Strategy<Value = Vec4> {
    prop::array::uniform4(ordered_f32()).prop_map(Vec4::from_f32)
}

fn in_unit_range(v: &Vec4) -> bool {
    v.to_f32().iter().all(|x| (0.0..=1.0).contains(x))
}

fn is_mask(v: &Vec4) -> bool {
    v.to_bits().iter().all(|&b| b == 0 || b == u32::MAX)
}

proptest! {
    #[test]
    fn min_max_selection_rules(a in ordered_vec4(), b in ordered_vec4()) {
        let max = ops::max(false, &a, &b);
        let min = ops::min(false, &a, &b);
        for i in 0..4 {
            let (x, y) = (a[i].as_f32(), b[i].as_f32());
            prop_assert_eq!(max[i], if x >= y { a[i] } else { b[i] });
            prop_assert_eq!(min[i], if x < y { a[i] } else { b[i] });
        }
    }

    #[test]
    fn min_is_a_iff_max_is_b(a in ordered_vec4(), b in ordered_vec4()) {
        let max = ops::max(false, &a, &b);
        let min = ops::min(false, &a, &b);
        for i in 0..4 {
            prop_assert_eq!(min[i] == a[i], max[i] == b[i], "lane {}: a={:?} b={:?}", i, a[i], b[i]);
        }
    }

    #[test]
    fn comparisons_only_produce_masks(a in any_vec4(), b in any_vec4()) {
        for r in [
            ops::ge(&a, &b),
            ops::lt(&a, &b),
            ops::ne(&a, &b),
            ops::ige(&a, &b),
            ops::ilt(&a, &b),
            ops::ine(&a, &b),
        ] {
            prop_assert!(is_mask(&r), "{:?}", r);
        }
    }

    #[test]
    fn bit_reinterpretation_is_lossless(bits in any::<u32>()) {
        let x = Scalar::from_bits(bits);
        let y = Scalar::from_bits(x.as_u32());
        prop_assert_eq!(y.as_f32().to_bits(), x.as_f32().to_bits());
        prop_assert_eq!(Scalar::from_i32(x.as_i32()), x);
    }

    #[test]
    fn saturated_results_stay_in_unit_range(a in any_vec4(), b in any_vec4(), c in any_vec4()) {
        for r in [
            ops::add(true, &a, &b),
            ops::mul(true, &a, &b),
            ops::div(true, &a, &b),
            ops::mad(true, &a, &b, &c),
            ops::max(true, &a, &b),
            ops::min(true, &a, &b),
            ops::rsq(true, &a),
            ops::sqrt(true, &a),
            ops::mov(true, &a),
            Vec4::splat(ops::dp4(true, &a, &b)),
        ] {
            prop_assert!(in_unit_range(&r), "{:?}", r);
        }
    }

    #[test]
    fn unsaturated_results_are_plain_ieee(a in any_vec4(), b in any_vec4()) {
        let add = ops::add(false, &a, &b).to_bits();
        let mul = ops::mul(false, &a, &b).to_bits();
        let div = ops::div(false, &a, &b).to_bits();
        for i in 0..4 {
            let (x, y) = (a[i].as_f32(), b[i].as_f32());
            prop_assert_eq!(add[i], (x + y).to_bits());
            prop_assert_eq!(mul[i], (x * y).to_bits());
            prop_assert_eq!(div[i], (x / y).to_bits());
        }
    }

    #[test]
    fn ftoi_matches_saturating_cast(a in any_vec4()) {
        // Rust's float->int `as` saturates and maps NaN to 0, which is the documented policy.
        let r = ops::ftoi(&a);
        let u = ops::ftou(&a);
        for i in 0..4 {
            let expected = a[i].as_f32() as i32;
            prop_assert_eq!(r[i].as_i32(), expected);
            prop_assert_eq!(u[i].as_u32(), expected as u32);
        }
    }

    #[test]
    fn iadd_is_wrapping(a in any_vec4(), b in any_vec4()) {
        let r = ops::iadd(&a, &b);
        for i in 0..4 {
            prop_assert_eq!(r[i].as_i32(), a[i].as_i32().wrapping_add(b[i].as_i32()));
        }
    }

    #[test]
    fn and_is_bitwise(a in any_vec4(), b in any_vec4()) {
        let r = ops::and(&a, &b);
        for i in 0..4 {
            prop_assert_eq!(r[i].as_u32(), a[i].as_u32() & b[i].as_u32());
        }
    }
}
