use tracing::debug;

use crate::error::NumeralError;
use crate::symbol::Symbol;

/// Run of related symbols waiting to be turned into a partial value.
///
/// Entries are always contiguous in the input, so the run covers
/// `start..start + len` of the normalised text.
#[derive(Debug, Default)]
pub(crate) struct ParseBuffer {
    entries: Vec<Symbol>,
    start: usize,
}

impl ParseBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn last(&self) -> Option<Symbol> {
        self.entries.last().copied()
    }

    pub(crate) fn push(&mut self, sym: Symbol, pos: usize) {
        if self.entries.is_empty() {
            self.start = pos;
        }
        self.entries.push(sym);
    }

    /// A buffer ending in a mirrored C holds a complete apostrophus group.
    pub(crate) fn is_apostrophus_group(&self) -> bool {
        self.last() == Some(Symbol::Closer)
    }

    /// Value of the buffered run. The buffer is empty afterwards.
    pub(crate) fn resolve(&mut self) -> Result<i64, NumeralError> {
        if self.entries.is_empty() {
            debug!(pos = self.start, "resolving empty buffer");
            return Ok(0);
        }
        let value = if self.is_apostrophus_group() {
            apostrophus_value(&self.entries, self.start)?
        } else {
            simple_value(&self.entries, self.start)?
        };
        self.entries.clear();
        Ok(value)
    }
}

/// A run of one repeated cardinal symbol.
pub(crate) fn simple_value(entries: &[Symbol], start: usize) -> Result<i64, NumeralError> {
    let Some(&first) = entries.first() else {
        return Ok(0);
    };
    if let Some(i) = entries.iter().position(|s| s.is_marker()) {
        return Err(NumeralError::MalformedApostrophusGroup {
            offset: start + i,
            reason: format!("'{}' outside a closed group", entries[i]),
        });
    }
    if let Some(i) = entries.iter().position(|&s| s != first) {
        return Err(NumeralError::MixedSymbolGroup { offset: start + i });
    }
    let unit = i64::from(first.value().unwrap_or(0));
    Ok(unit * entries.len() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closing,
    Opening,
}

/// An apostrophus group `C…C|Ͻ…Ͻ`, read from the end.
///
/// With no opening C's the group is a half value, 50 × 10^closing.
/// Otherwise both runs must have the same length k and the value is
/// 100 × 10^k.
pub(crate) fn apostrophus_value(entries: &[Symbol], start: usize) -> Result<i64, NumeralError> {
    let mut closing = 0usize;
    let mut opening = 0usize;
    let mut phase = Phase::Closing;

    for (i, &sym) in entries.iter().enumerate().rev() {
        let offset = start + i;
        match (phase, sym) {
            (Phase::Closing, Symbol::Closer) => closing += 1,
            (Phase::Closing, Symbol::Divider) => phase = Phase::Opening,
            (Phase::Opening, Symbol::C) => opening += 1,
            (Phase::Closing, other) => {
                return Err(NumeralError::MalformedApostrophusGroup {
                    offset,
                    reason: format!(
                        "expected '{}' or '{}', found '{other}'",
                        Symbol::Closer,
                        Symbol::Divider
                    ),
                })
            }
            (Phase::Opening, other) => {
                return Err(NumeralError::MalformedApostrophusGroup {
                    offset,
                    reason: format!("expected '{}', found '{other}'", Symbol::C),
                })
            }
        }
    }

    if phase == Phase::Closing {
        return Err(NumeralError::MalformedApostrophusGroup {
            offset: start,
            reason: format!("missing '{}'", Symbol::Divider),
        });
    }
    if opening > 0 && opening != closing {
        return Err(NumeralError::UnbalancedApostrophusGroup {
            offset: start,
            opening,
            closing,
        });
    }

    let base: i64 = if opening == 0 { 50 } else { 100 };
    u32::try_from(closing)
        .ok()
        .and_then(|exp| 10i64.checked_pow(exp))
        .and_then(|scale| scale.checked_mul(base))
        .ok_or(NumeralError::InvalidMagnitude { value: i64::MAX })
}
