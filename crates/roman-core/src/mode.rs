//! Symbol-ordering and large-number policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumeralError;

/// How cardinal symbols may be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// No subtraction; symbols form a non-increasing run (`IIII`, `VIIII`).
    Primitive,
    /// Only `I` before `V`/`X`, `X` before `L`/`C`, `C` before `D`/`M`.
    #[default]
    Strict,
    /// Any lower symbol directly before a higher one is subtracted.
    Relaxed,
}

/// How magnitudes above the plain symbol range are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LargeMode {
    /// Plain repetition of `M`.
    #[default]
    Simple,
    /// Bracket groups of `C`, `|` and the mirrored C: `C|Ͻ` = 1,000, `|ϽϽ` = 5,000.
    Apostrophus,
    /// `$` multiplies everything before it by 1,000: `V$L` = 5,050.
    Cifrao,
}

impl SymbolMode {
    pub const ALL: [SymbolMode; 3] = [SymbolMode::Primitive, SymbolMode::Strict, SymbolMode::Relaxed];

    pub fn name(self) -> &'static str {
        match self {
            SymbolMode::Primitive => "primitive",
            SymbolMode::Strict => "strict",
            SymbolMode::Relaxed => "relaxed",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl LargeMode {
    pub const ALL: [LargeMode; 3] = [LargeMode::Simple, LargeMode::Apostrophus, LargeMode::Cifrao];

    pub fn name(self) -> &'static str {
        match self {
            LargeMode::Simple => "simple",
            LargeMode::Apostrophus => "apostrophus",
            LargeMode::Cifrao => "cifrao",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SymbolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LargeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolMode {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NumeralError::UnknownMode(s.to_string()))
    }
}

impl FromStr for LargeMode {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "cifrão" is the spelling used in most references
        if s.eq_ignore_ascii_case("cifrão") {
            return Ok(LargeMode::Cifrao);
        }
        LargeMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NumeralError::UnknownMode(s.to_string()))
    }
}
