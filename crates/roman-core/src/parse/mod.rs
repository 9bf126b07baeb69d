//! Numeral text to integer.
//!
//! Input is validated against the mode-pair grammar first; only text that
//! passes reaches the scanner. The scanner walks symbols left to right,
//! collecting runs of related symbols in a [`ParseBuffer`] and flushing each
//! run into the accumulator with a sign chosen by the subtraction rule.

mod buffer;

use tracing::{debug, debug_span};

use crate::error::NumeralError;
use crate::grammar::{normalize, validate};
use crate::mode::{LargeMode, SymbolMode};
use crate::symbol::{lookup, Symbol};
use crate::MAX_VALUE;

use buffer::ParseBuffer;

/// Parse with the common defaults: strict symbols, no large-number notation.
pub fn parse_default(text: &str) -> Result<u32, NumeralError> {
    parse(text, SymbolMode::Strict, LargeMode::Simple)
}

pub fn parse(
    text: &str,
    symbol_mode: SymbolMode,
    large_mode: LargeMode,
) -> Result<u32, NumeralError> {
    validate(text, symbol_mode, large_mode)?;
    let _span = debug_span!("parse", input = text, %symbol_mode, %large_mode).entered();

    let symbols = to_symbols(&normalize(text))?;
    let mut acc = Accumulator::default();
    let mut buf = ParseBuffer::new();

    for (pos, &sym) in symbols.iter().enumerate() {
        match sym {
            Symbol::Cifrao => {
                acc.add(buf.resolve()?)?;
                acc.scale(1000)?;
                continue;
            }
            Symbol::Divider => match buf.last() {
                None | Some(Symbol::C) | Some(Symbol::Divider) => {}
                // a closed group is complete; this divider opens the next one
                Some(Symbol::Closer) => acc.add(buf.resolve()?)?,
                Some(other) => {
                    return Err(NumeralError::MalformedApostrophusGroup {
                        offset: pos,
                        reason: format!("'{}' after '{other}'", Symbol::Divider),
                    })
                }
            },
            Symbol::Closer => {
                if !matches!(buf.last(), Some(Symbol::Divider | Symbol::Closer)) {
                    return Err(NumeralError::MalformedApostrophusGroup {
                        offset: pos,
                        reason: format!(
                            "'{}' must follow '{}' or '{}'",
                            Symbol::Closer,
                            Symbol::Divider,
                            Symbol::Closer
                        ),
                    });
                }
            }
            cardinal => {
                if let Some(last) = buf.last().filter(|&last| last != cardinal) {
                    let subtract = subtracts(last, cardinal);
                    let value = buf.resolve()?;
                    debug!(pos, value, subtract, "flush");
                    if subtract {
                        acc.sub(value)?;
                    } else {
                        acc.add(value)?;
                    }
                }
            }
        }
        buf.push(sym, pos);
    }
    acc.add(buf.resolve()?)?;
    acc.finish()
}

/// Subtraction rule: a cardinal run followed by a greater cardinal. A
/// buffer ending in a marker (a closed apostrophus group) always adds.
fn subtracts(last: Symbol, next: Symbol) -> bool {
    match (last.value(), next.value()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

fn to_symbols(normalized: &str) -> Result<Vec<Symbol>, NumeralError> {
    normalized
        .chars()
        .enumerate()
        .map(|(offset, glyph)| lookup(glyph).ok_or(NumeralError::UnknownSymbol { glyph, offset }))
        .collect()
}

/// Running total with overflow and range checks.
#[derive(Debug, Default)]
struct Accumulator(i64);

impl Accumulator {
    fn add(&mut self, v: i64) -> Result<(), NumeralError> {
        self.0 = self.0.checked_add(v).ok_or(overflow())?;
        Ok(())
    }

    fn sub(&mut self, v: i64) -> Result<(), NumeralError> {
        self.0 = self.0.checked_sub(v).ok_or(overflow())?;
        Ok(())
    }

    fn scale(&mut self, factor: i64) -> Result<(), NumeralError> {
        self.0 = self.0.checked_mul(factor).ok_or(overflow())?;
        Ok(())
    }

    fn finish(self) -> Result<u32, NumeralError> {
        u32::try_from(self.0)
            .ok()
            .filter(|&v| v <= MAX_VALUE)
            .ok_or(NumeralError::InvalidMagnitude { value: self.0 })
    }
}

fn overflow() -> NumeralError {
    NumeralError::InvalidMagnitude { value: i64::MAX }
}
