//! The board view.

use last_core::Board;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Horizontal columns per board cell, so the square grid does not render
/// squashed in a terminal font.
pub const CELL_COLUMNS: u16 = 3;

/// Renders the board row-major, one text row per board row.
pub struct BoardWidget<'a> {
    board: &'a Board,
    theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }

    /// Columns needed to show the whole board.
    pub fn width(board: &Board) -> u16 {
        board.width() as u16 * CELL_COLUMNS
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (pos, value) in self.board.cells() {
            let x = area.x + pos.col as u16 * CELL_COLUMNS + CELL_COLUMNS / 2;
            let y = area.y + pos.row as u16;
            if y >= area.bottom() || x >= area.right() {
                continue;
            }
            buf.set_string(x, y, self.theme.glyph_for(*value), self.theme.style_for(*value));
        }
    }
}
