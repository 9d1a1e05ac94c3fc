//! Board cell values.

use strum::Display;

use crate::grid::Grid;

/// The playing field: a grid of symbolic cell values.
pub type Board = Grid<CellValue>;

/// What a single board position holds.
///
/// Exactly one `Me` and one `Rival` token exist on a live board; every other
/// position is `Blank` or a capturable free `Cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum CellValue {
    /// Dead/empty position.
    #[default]
    Blank,
    /// A live, capturable free cell.
    Cell,
    /// The human player's token.
    Me,
    /// The adversary's token.
    Rival,
}

impl CellValue {
    /// True for the two player tokens.
    pub const fn is_token(&self) -> bool {
        matches!(self, CellValue::Me | CellValue::Rival)
    }

    /// Plain ASCII symbol for this value. The TUI maps these to styled
    /// glyphs; the core only deals in symbols.
    pub const fn symbol(&self) -> char {
        match self {
            CellValue::Blank => '.',
            CellValue::Cell => 'c',
            CellValue::Me => 'm',
            CellValue::Rival => 'r',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert!(CellValue::Me.is_token());
        assert!(CellValue::Rival.is_token());
        assert!(!CellValue::Cell.is_token());
        assert!(!CellValue::Blank.is_token());
    }

    #[test]
    fn test_symbols_distinct() {
        let symbols = [
            CellValue::Blank.symbol(),
            CellValue::Cell.symbol(),
            CellValue::Me.symbol(),
            CellValue::Rival.symbol(),
        ];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
