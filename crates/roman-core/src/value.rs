//! Immutable numeral value with numeric views and rendering helpers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumeralError;
use crate::format::format;
use crate::mode::{LargeMode, SymbolMode};
use crate::parse::parse;
use crate::MAX_VALUE;

/// A non-negative integer in `0..=MAX_VALUE` that renders as a roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct NumeralValue(u32);

impl NumeralValue {
    pub fn new(value: i64) -> Result<Self, NumeralError> {
        if !(0..=i64::from(MAX_VALUE)).contains(&value) {
            return Err(NumeralError::InvalidMagnitude { value });
        }
        Ok(Self(value as u32))
    }

    pub fn parse(
        text: &str,
        symbol_mode: SymbolMode,
        large_mode: LargeMode,
    ) -> Result<Self, NumeralError> {
        parse(text, symbol_mode, large_mode).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_i32(self) -> i32 {
        // MAX_VALUE is i32::MAX, so this never wraps
        self.0 as i32
    }

    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Strict symbols, no large-number notation.
    pub fn to_roman(self) -> String {
        self.to_roman_with(SymbolMode::Strict)
    }

    pub fn to_roman_with(self, symbol_mode: SymbolMode) -> String {
        self.to_roman_full(LargeMode::Simple, symbol_mode)
    }

    pub fn to_roman_full(self, large_mode: LargeMode, symbol_mode: SymbolMode) -> String {
        // in range by construction, so formatting cannot fail
        format(self.as_i64(), large_mode, symbol_mode).unwrap_or_default()
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_roman())
    }
}

impl FromStr for NumeralValue {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, SymbolMode::Strict, LargeMode::Simple)
    }
}

impl TryFrom<i64> for NumeralValue {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for NumeralValue {
    type Error = NumeralError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<NumeralValue> for u32 {
    fn from(v: NumeralValue) -> Self {
        v.0
    }
}

impl From<NumeralValue> for i64 {
    fn from(v: NumeralValue) -> Self {
        v.as_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_and_render() {
        let v = NumeralValue::new(1994).unwrap();
        assert_eq!(v.get(), 1994);
        assert_eq!(v.to_string(), "MCMXCIV");
        assert_eq!(v.to_roman_with(SymbolMode::Primitive), "MDCCCCLXXXXIIII");
        assert_eq!(
            NumeralValue::new(15_000)
                .unwrap()
                .to_roman_full(LargeMode::Cifrao, SymbolMode::Strict),
            "XV$"
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            NumeralValue::new(-1).unwrap_err(),
            NumeralError::InvalidMagnitude { value: -1 }
        );
        assert!(NumeralValue::try_from(u32::MAX).is_err());
        assert!(NumeralValue::new(i64::from(MAX_VALUE)).is_ok());
    }

    #[test]
    fn numeric_views() {
        let v = NumeralValue::new(i64::from(MAX_VALUE)).unwrap();
        assert_eq!(v.as_i32(), i32::MAX);
        assert_eq!(v.as_i64(), 2_147_483_647);
        assert_eq!(v.as_f64(), 2_147_483_647.0);
        assert_eq!(NumeralValue::new(12).unwrap().as_f32(), 12.0);
        assert_eq!(u32::from(NumeralValue::new(7).unwrap()), 7);
        assert_eq!(i64::from(NumeralValue::new(7).unwrap()), 7);
    }

    #[test]
    fn from_str_uses_defaults() {
        let v: NumeralValue = "mmxxiv".parse().unwrap();
        assert_eq!(v.get(), 2024);
        assert!("IIII".parse::<NumeralValue>().is_err());
        let relaxed = NumeralValue::parse("IIII", SymbolMode::Primitive, LargeMode::Simple).unwrap();
        assert_eq!(relaxed.get(), 4);
    }

    #[test]
    fn ordering_follows_value() {
        let a = NumeralValue::new(9).unwrap();
        let b = NumeralValue::new(10).unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_as_plain_integer() {
        let v = NumeralValue::new(42).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "42");
        let back: NumeralValue = serde_json::from_str("42").unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<NumeralValue>("-3").is_err());
    }
}
