//! The 4×4 symbol grid used as the codec's digit set.
//!
//! Symbols are stored row-major, so the symbol at `(row, col)` is
//! `symbols[row * 4 + col]`. Row 0 is the northernmost band of a cell and
//! column 0 the westernmost.

use crate::error::{DigipinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows and columns of the subdivision grid.
pub const GRID_SIZE: usize = 4;

/// Number of symbols in an alphabet.
pub const SYMBOL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Symbols of the reference deployment.
pub const DEFAULT_SYMBOLS: [char; SYMBOL_COUNT] = [
    'F', 'C', '9', '8', //
    'J', '3', '2', '7', //
    'K', '4', '5', '6', //
    'L', 'M', 'P', 'T',
];

/// Sixteen distinct symbols addressed by grid row and column.
///
/// Serialized as a 16 character string.
///
/// # Examples
///
/// ```
/// use digipin::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.symbol(0, 0), 'F');
/// assert_eq!(alphabet.position('T'), Some((3, 3)));
/// assert_eq!(alphabet.position('A'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: [char; SYMBOL_COUNT],
}

impl Alphabet {
    /// Builds an alphabet from 16 distinct symbols listed row-major.
    pub fn new(symbols: [char; SYMBOL_COUNT]) -> Result<Self> {
        for (idx, symbol) in symbols.iter().enumerate() {
            if symbols[..idx].contains(symbol) {
                return Err(DigipinError::InvalidConfig(format!(
                    "Alphabet symbol '{}' appears more than once",
                    symbol
                )));
            }
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(DigipinError::InvalidConfig(format!(
                    "Alphabet symbol at index {} must be printable",
                    idx
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Parses a 16 character string such as `"FC98J327K456LMPT"`.
    pub fn parse(symbols: &str) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        let symbols: [char; SYMBOL_COUNT] = chars.try_into().map_err(|chars: Vec<char>| {
            DigipinError::InvalidConfig(format!(
                "Alphabet must have exactly {} symbols, got {}",
                SYMBOL_COUNT,
                chars.len()
            ))
        })?;
        Self::new(symbols)
    }

    /// Symbol at a grid position. Panics if `row` or `col` is not below 4.
    #[inline]
    pub fn symbol(&self, row: usize, col: usize) -> char {
        self.symbols[row * GRID_SIZE + col]
    }

    /// Grid position of `symbol`, scanning row-major.
    pub fn position(&self, symbol: char) -> Option<(usize, usize)> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|idx| (idx / GRID_SIZE, idx % GRID_SIZE))
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> &[char; SYMBOL_COUNT] {
        &self.symbols
    }

    /// Characters of `code` outside the alphabet, deduplicated, in order of first appearance.
    pub fn invalid_chars(&self, code: &str) -> Vec<char> {
        let mut invalid = Vec::new();
        for c in code.chars() {
            if !self.contains(c) && !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        invalid
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS,
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = DigipinError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_layout() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.symbol(0, 0), 'F');
        assert_eq!(alphabet.symbol(0, 3), '8');
        assert_eq!(alphabet.symbol(1, 1), '3');
        assert_eq!(alphabet.symbol(2, 0), 'K');
        assert_eq!(alphabet.symbol(3, 3), 'T');
        assert_eq!(alphabet.to_string(), "FC98J327K456LMPT");
    }

    #[test]
    fn test_position_is_inverse_of_symbol() {
        let alphabet = Alphabet::default();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let symbol = alphabet.symbol(row, col);
                assert_eq!(alphabet.position(symbol), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_parse_rejects_duplicates_and_bad_length() {
        assert!(Alphabet::parse("FC98J327K456LMPT").is_ok());
        assert!(Alphabet::parse("FC98J327K456LMP").is_err());
        assert!(Alphabet::parse("FC98J327K456LMPTX").is_err());
        let err = Alphabet::parse("FF98J327K456LMPT").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_invalid_chars_deduplicated() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.invalid_chars("ABCABC"), vec!['A', 'B']);
        assert!(alphabet.invalid_chars("FC98J327K4").is_empty());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Alphabet::default()).unwrap();
        assert_eq!(json, "\"FC98J327K456LMPT\"");
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Alphabet::default());
        assert!(serde_json::from_str::<Alphabet>("\"ABC\"").is_err());
    }
}
