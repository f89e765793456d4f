use thiserror::Error;

/// Errors raised while building ALU operands from untyped input.
///
/// The instructions themselves never fail; see [`crate::ops`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AluError {
    #[error("register lane index {0} out of range (expected 0..=3)")]
    InvalidLane(u8),
    #[error("register requires exactly 4 lanes, got {len}")]
    LaneCount { len: usize },
    #[error("register requires exactly 16 bytes, got {len}")]
    ByteLength { len: usize },
    #[error("unknown ALU quirk {0:?}")]
    UnknownQuirk(String),
    #[error("ALU quirk preset {0:?} cannot be combined with other names")]
    QuirkPresetCombined(String),
}
