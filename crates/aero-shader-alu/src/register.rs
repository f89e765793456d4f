//! 4-component register values.

use std::ops::Index;

use bytemuck::{Pod, Zeroable};

use crate::{AluError, Scalar};

/// Register component, `x`/`y`/`z`/`w` (or `r`/`g`/`b`/`a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    X,
    Y,
    Z,
    W,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::X, Lane::Y, Lane::Z, Lane::W];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Lane {
    type Error = AluError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Lane::X),
            1 => Ok(Lane::Y),
            2 => Ok(Lane::Z),
            3 => Ok(Lane::W),
            other => Err(AluError::InvalidLane(other)),
        }
    }
}

/// A 4-lane register value.
///
/// The layout matches a `vec4<u32>` slot in a register-file buffer, so callers can
/// `bytemuck::cast` between `[u32; 4]`, `[u8; 16]` and `Vec4`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Vec4(pub [Scalar; 4]);

impl Vec4 {
    pub const ZERO: Vec4 = Vec4([Scalar::ZERO; 4]);

    pub const fn new(lanes: [Scalar; 4]) -> Self {
        Self(lanes)
    }

    /// Replicates `value` into every lane.
    pub const fn splat(value: Scalar) -> Self {
        Self([value; 4])
    }

    /// Builds a register from float lanes. Never saturates.
    pub fn from_f32(lanes: [f32; 4]) -> Self {
        Self(lanes.map(|v| Scalar::from_f32(v, false)))
    }

    pub fn from_i32(lanes: [i32; 4]) -> Self {
        Self(lanes.map(Scalar::from_i32))
    }

    pub fn from_bits(lanes: [u32; 4]) -> Self {
        bytemuck::cast(lanes)
    }

    pub fn lane(&self, lane: Lane) -> Scalar {
        self.0[lane.index()]
    }

    pub fn lanes(&self) -> [Scalar; 4] {
        self.0
    }

    pub fn to_f32(&self) -> [f32; 4] {
        self.0.map(Scalar::as_f32)
    }

    pub fn to_i32(&self) -> [i32; 4] {
        self.0.map(Scalar::as_i32)
    }

    pub fn to_bits(&self) -> [u32; 4] {
        bytemuck::cast(*self)
    }

    pub(crate) fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Vec4 {
        Vec4(self.0.map(f))
    }

    pub(crate) fn zip_map(&self, other: &Vec4, f: impl Fn(Scalar, Scalar) -> Scalar) -> Vec4 {
        Vec4(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    pub(crate) fn zip3_map(
        &self,
        b: &Vec4,
        c: &Vec4,
        f: impl Fn(Scalar, Scalar, Scalar) -> Scalar,
    ) -> Vec4 {
        Vec4(std::array::from_fn(|i| f(self.0[i], b.0[i], c.0[i])))
    }
}

impl Index<Lane> for Vec4 {
    type Output = Scalar;

    fn index(&self, lane: Lane) -> &Scalar {
        &self.0[lane.index()]
    }
}

impl Index<usize> for Vec4 {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.0[index]
    }
}

impl From<[Scalar; 4]> for Vec4 {
    fn from(lanes: [Scalar; 4]) -> Self {
        Self(lanes)
    }
}

impl TryFrom<&[u32]> for Vec4 {
    type Error = AluError;

    fn try_from(bits: &[u32]) -> Result<Self, Self::Error> {
        let lanes: [u32; 4] = bits
            .try_into()
            .map_err(|_| AluError::LaneCount { len: bits.len() })?;
        Ok(Self::from_bits(lanes))
    }
}

impl TryFrom<&[u8]> for Vec4 {
    type Error = AluError;

    /// Reads a register stored in native lane order; `bytes` need not be aligned.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytemuck::try_pod_read_unaligned(bytes)
            .map_err(|_| AluError::ByteLength { len: bytes.len() })
    }
}
