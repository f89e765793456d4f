//! Per-instruction ALU semantics for the SM4-class shader virtual machine.
//!
//! This crate only supplies instruction bodies. Bytecode decoding, opcode dispatch, the register
//! file (including swizzle/write-mask resolution) and control flow all live in the caller. Every
//! function in [`ops`] is pure: it reads already-resolved [`Vec4`] operands and returns a fresh
//! register (or a [`Scalar`] for dot products).
//!
//! A register lane is a single 32-bit cell. Reading it as `f32`, `i32` or `u32` never converts
//! anything; only the named conversion instructions (`ftoi`, `itof`, ...) change bit patterns.

mod error;
pub mod ops;
pub mod quirks;
pub mod register;
pub mod scalar;

pub use error::AluError;
pub use quirks::AluQuirks;
pub use register::{Lane, Vec4};
pub use scalar::{saturate, Scalar};
