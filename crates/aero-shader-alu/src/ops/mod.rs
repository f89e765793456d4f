//! The instruction library.
//!
//! One function per SM4 ALU mnemonic. Operands arrive fully resolved (swizzle, source
//! modifiers and register lookup are the dispatcher's job) and results are returned by value;
//! write masking is also left to the caller. Float-producing instructions take the
//! instruction's `_sat` modifier as their first argument.
//!
//! Dispatchers that want bit-exact reference results use the `*_with` variants together with
//! [`crate::AluQuirks::REFERENCE`].

mod arith;
mod cmp;
mod convert;
mod dot;
mod logic;
mod minmax;

pub use arith::{add, div, iadd, imad, imad_with, mad, mad_with, mov, mul, rsq, sqrt};
pub use cmp::{ge, ige, ilt, ine, lt, ne};
pub use convert::{ftoi, ftou, itof, utof};
pub use dot::{dp2, dp3, dp4};
pub use logic::{and, xor, xor_with};
pub use minmax::{imin, max, min};
