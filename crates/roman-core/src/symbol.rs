//! Roman numeral symbol table.
//!
//! Seven cardinal symbols carry a value; three marker symbols (cifrão,
//! apostrophus divider and mirrored C) only modify how neighbouring symbols
//! are read. The table is constant data: glyph lookup is a `match`, and
//! value lookup walks [`Symbol::CARDINALS`] from the top.

use std::fmt;

use crate::error::NumeralError;

/// Canonical glyph of the mirrored C (U+03FD).
pub const CLOSER_GLYPH: char = 'Ͻ';
/// ASCII stand-in for [`CLOSER_GLYPH`].
pub const CLOSER_ALIAS: char = ')';
pub const DIVIDER_GLYPH: char = '|';
pub const CIFRAO_GLYPH: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    M,
    D,
    C,
    L,
    X,
    V,
    I,
    /// Thousand separator; multiplies the value read so far by 1,000.
    Cifrao,
    /// Apostrophus between the opening `C` run and the closing run.
    Divider,
    /// Mirrored C closing an apostrophus group.
    Closer,
}

impl Symbol {
    /// Cardinal symbols, greatest value first.
    pub const CARDINALS: [Symbol; 7] = [
        Symbol::M,
        Symbol::D,
        Symbol::C,
        Symbol::L,
        Symbol::X,
        Symbol::V,
        Symbol::I,
    ];

    pub const MARKERS: [Symbol; 3] = [Symbol::Cifrao, Symbol::Divider, Symbol::Closer];

    pub fn glyph(self) -> char {
        match self {
            Symbol::M => 'M',
            Symbol::D => 'D',
            Symbol::C => 'C',
            Symbol::L => 'L',
            Symbol::X => 'X',
            Symbol::V => 'V',
            Symbol::I => 'I',
            Symbol::Cifrao => CIFRAO_GLYPH,
            Symbol::Divider => DIVIDER_GLYPH,
            Symbol::Closer => CLOSER_GLYPH,
        }
    }

    /// Additional glyphs accepted on input.
    pub fn aliases(self) -> &'static [char] {
        match self {
            Symbol::Closer => &[CLOSER_ALIAS],
            _ => &[],
        }
    }

    /// Numeric value; `None` for marker symbols.
    pub fn value(self) -> Option<u32> {
        match self {
            Symbol::M => Some(1000),
            Symbol::D => Some(500),
            Symbol::C => Some(100),
            Symbol::L => Some(50),
            Symbol::X => Some(10),
            Symbol::V => Some(5),
            Symbol::I => Some(1),
            Symbol::Cifrao | Symbol::Divider | Symbol::Closer => None,
        }
    }

    pub fn is_marker(self) -> bool {
        self.value().is_none()
    }

    pub fn is_cardinal(self) -> bool {
        !self.is_marker()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Look up the symbol for a glyph, ignoring case.
pub fn symbol_of(glyph: char) -> Result<Symbol, NumeralError> {
    lookup(glyph).ok_or(NumeralError::UnknownSymbol { glyph, offset: 0 })
}

pub(crate) fn lookup(glyph: char) -> Option<Symbol> {
    let sym = match glyph {
        'M' | 'm' => Symbol::M,
        'D' | 'd' => Symbol::D,
        'C' | 'c' => Symbol::C,
        'L' | 'l' => Symbol::L,
        'X' | 'x' => Symbol::X,
        'V' | 'v' => Symbol::V,
        'I' | 'i' => Symbol::I,
        CIFRAO_GLYPH => Symbol::Cifrao,
        DIVIDER_GLYPH => Symbol::Divider,
        // lower-case form of U+03FD is U+037B
        CLOSER_GLYPH | 'ͻ' | CLOSER_ALIAS => Symbol::Closer,
        _ => return None,
    };
    Some(sym)
}

/// Greatest cardinal symbol whose value does not exceed `value`.
pub fn best_symbol_for(value: i64) -> Result<Symbol, NumeralError> {
    if value < 1 {
        return Err(NumeralError::InvalidMagnitude { value });
    }
    Symbol::CARDINALS
        .into_iter()
        .find(|s| s.value().is_some_and(|v| i64::from(v) <= value))
        .ok_or(NumeralError::InvalidMagnitude { value })
}
