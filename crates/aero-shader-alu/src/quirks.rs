//! Reference-compatibility switches for instructions whose historical behavior disagrees with
//! their documented contract.

use std::str::FromStr;

use bitflags::bitflags;
use tracing::debug;

use crate::AluError;

bitflags! {
    /// Per-instruction compatibility quirks.
    ///
    /// These change instruction *results*, so a dispatcher that caches translated or
    /// pre-evaluated shaders must include them in its cache key.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct AluQuirks: u32 {
        /// `mad`/`imad` read the second multiplicand from lane `x` of src1 for every
        /// destination lane instead of the matching lane.
        const MAD_SRC1_LANE_X = 1 << 0;
        /// `xor` computes bitwise OR.
        const XOR_IS_OR = 1 << 1;
    }
}

impl AluQuirks {
    /// Bit-exact with the reference interpreter.
    pub const REFERENCE: AluQuirks = AluQuirks::MAD_SRC1_LANE_X.union(AluQuirks::XOR_IS_OR);

    // Not `from_name`: bitflags already generates that for the constant names.
    fn quirk_named(name: &str) -> Option<AluQuirks> {
        match name {
            "mad-src1-lane-x" => Some(AluQuirks::MAD_SRC1_LANE_X),
            "xor-is-or" => Some(AluQuirks::XOR_IS_OR),
            _ => None,
        }
    }

    fn preset_named(name: &str) -> Option<AluQuirks> {
        match name {
            "none" => Some(AluQuirks::empty()),
            "default" => Some(AluQuirks::default()),
            "reference" => Some(AluQuirks::REFERENCE),
            _ => None,
        }
    }
}

impl Default for AluQuirks {
    /// Documented per-lane `mad`, OR-behaving `xor`.
    fn default() -> Self {
        AluQuirks::XOR_IS_OR
    }
}

impl FromStr for AluQuirks {
    type Err = AluError;

    /// Parses a comma-separated list such as `"mad-src1-lane-x, xor-is-or"`, or one of the
    /// presets `none`, `default`, `reference` on its own.
    ///
    /// Names are case-insensitive. An empty string yields no quirks. A preset combined with any
    /// other name is rejected rather than merged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        let mut quirks = AluQuirks::empty();
        for raw in &names {
            let name = raw.to_ascii_lowercase();
            if let Some(preset) = AluQuirks::preset_named(&name) {
                if names.len() > 1 {
                    return Err(AluError::QuirkPresetCombined(raw.to_string()));
                }
                quirks = preset;
                continue;
            }
            let Some(flag) = AluQuirks::quirk_named(&name) else {
                return Err(AluError::UnknownQuirk(raw.to_string()));
            };
            quirks |= flag;
        }
        debug!(?quirks, input = s, "parsed ALU quirks");
        Ok(quirks)
    }
}
