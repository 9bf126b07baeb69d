use crate::mode::{LargeMode, SymbolMode};

/// Failure of a format, parse or validation call.
///
/// Semantic parse failures carry the character offset (into the normalised
/// input) at which the inconsistency was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("invalid magnitude: {value} (must be in 0..={max})", max = crate::MAX_VALUE)]
    InvalidMagnitude { value: i64 },

    #[error("'{input}' is not a valid {symbol_mode}/{large_mode} roman numeral")]
    Grammar {
        input: String,
        symbol_mode: SymbolMode,
        large_mode: LargeMode,
    },

    #[error("not a roman numeral character: '{glyph}' at {offset}")]
    UnknownSymbol { glyph: char, offset: usize },

    #[error("character group contains different symbols at {offset}")]
    MixedSymbolGroup { offset: usize },

    #[error("malformed apostrophus group at {offset}: {reason}")]
    MalformedApostrophusGroup { offset: usize, reason: String },

    #[error("unbalanced apostrophus group at {offset} ({opening} opening / {closing} closing)")]
    UnbalancedApostrophusGroup {
        offset: usize,
        opening: usize,
        closing: usize,
    },

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl NumeralError {
    /// Character offset of a semantic or symbol error, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            NumeralError::UnknownSymbol { offset, .. }
            | NumeralError::MixedSymbolGroup { offset }
            | NumeralError::MalformedApostrophusGroup { offset, .. }
            | NumeralError::UnbalancedApostrophusGroup { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn is_grammar(&self) -> bool {
        matches!(self, NumeralError::Grammar { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_only_for_positional_errors() {
        assert_eq!(NumeralError::MixedSymbolGroup { offset: 3 }.offset(), Some(3));
        assert_eq!(
            NumeralError::UnknownSymbol {
                glyph: 'Z',
                offset: 0
            }
            .offset(),
            Some(0)
        );
        assert_eq!(NumeralError::InvalidMagnitude { value: -1 }.offset(), None);
    }

    #[test]
    fn grammar_message_names_modes() {
        let err = NumeralError::Grammar {
            input: "I$".into(),
            symbol_mode: SymbolMode::Strict,
            large_mode: LargeMode::Simple,
        };
        assert!(err.is_grammar());
        assert_eq!(
            err.to_string(),
            "'I$' is not a valid strict/simple roman numeral"
        );
    }

    #[test]
    fn magnitude_message_names_ceiling() {
        let err = NumeralError::InvalidMagnitude { value: -1 };
        assert_eq!(
            err.to_string(),
            "invalid magnitude: -1 (must be in 0..=2147483647)"
        );
    }
}
