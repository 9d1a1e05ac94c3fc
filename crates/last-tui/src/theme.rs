//! Styling for board glyphs.

use last_core::{CellValue, GameRng};
use ratatui::style::{Color, Modifier, Style};

/// The player-color palette. Two of these are drawn at random per session
/// so the tokens look different from game to game.
const PALETTE: [Color; 7] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Cyan,
    Color::Magenta,
];

/// Styles for each cell value.
#[derive(Debug, Clone)]
pub struct Theme {
    pub blank: Style,
    pub cell: Style,
    pub me: Style,
    pub rival: Style,
}

impl Theme {
    /// A theme with token colors shuffled out of the palette.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut colors = PALETTE;
        rng.shuffle(&mut colors);
        Self {
            blank: Style::default(),
            cell: Style::default().fg(Color::Gray),
            me: Style::default().fg(colors[0]).add_modifier(Modifier::BOLD),
            rival: Style::default().fg(colors[1]).add_modifier(Modifier::BOLD),
        }
    }

    pub fn style_for(&self, value: CellValue) -> Style {
        match value {
            CellValue::Blank => self.blank,
            CellValue::Cell => self.cell,
            CellValue::Me => self.me,
            CellValue::Rival => self.rival,
        }
    }

    /// Display glyph for a cell value. Free cells and tokens get distinct
    /// ring glyphs; the colors tell the two tokens apart.
    pub fn glyph_for(&self, value: CellValue) -> &'static str {
        match value {
            CellValue::Blank => " ",
            CellValue::Cell => "◎",
            CellValue::Me | CellValue::Rival => "◉",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            blank: Style::default(),
            cell: Style::default().fg(Color::Gray),
            me: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            rival: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
