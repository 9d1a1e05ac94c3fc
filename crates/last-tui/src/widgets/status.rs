//! The status lines under the board.

use last_core::{CellValue, Outcome, Player, Session};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Level summary, remaining count, turn owner and prompts.
pub struct StatusWidget<'a> {
    pub session: &'a Session,
    pub theme: &'a Theme,
    /// Zero-based index into the level catalog.
    pub level_index: usize,
    /// True while the opening "you go first?" prompt is up.
    pub choosing_first: bool,
    pub notice: Option<&'a str>,
}

impl StatusWidget<'_> {
    fn token_span(&self, value: CellValue) -> Span<'static> {
        Span::styled(self.theme.glyph_for(value), self.theme.style_for(value))
    }

    fn level_line(&self) -> Line<'static> {
        let level = self.session.level();
        let mut spans = vec![Span::raw(format!(
            "Level: {}  Total: {}  Limit: {}",
            self.level_index + 1,
            level.total_cells,
            level.capture_limit,
        ))];
        if level.hard {
            spans.push(Span::styled("  hard", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn turn_line(&self) -> Line<'static> {
        if self.choosing_first {
            return Line::styled("You go first? (y/n)", Style::default().fg(Color::Yellow));
        }
        match self.session.outcome() {
            Some(Outcome::HumanWon) => {
                Line::styled("You are the last :)", Style::default().fg(Color::Green))
            }
            Some(Outcome::RivalWon) => {
                Line::styled("Your rival is the last :(", Style::default().fg(Color::Red))
            }
            None => Line::from(vec![
                Span::raw("You: "),
                self.token_span(CellValue::Me),
                Span::raw("  Rival: "),
                self.token_span(CellValue::Rival),
                Span::raw(format!("  Left: {:2}  Turn: ", self.session.remaining_total())),
                self.token_span(self.session.active_player().token()),
            ]),
        }
    }

    fn help_line(&self) -> Line<'static> {
        let help = if self.choosing_first {
            "y/enter: go first  n: let the rival start  q: quit".to_string()
        } else {
            format!(
                "1-{}: cells to eat  <-/->: level  r: reset  q: quit",
                self.session.capture_limit()
            )
        };
        Line::styled(help, Style::default().fg(Color::DarkGray))
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.level_line(), self.turn_line(), self.help_line()];
        if let Some(notice) = self.notice {
            lines.push(Line::styled(
                notice.to_string(),
                Style::default().fg(Color::Red),
            ));
        }
        Paragraph::new(lines).render(area, buf);
    }
}
