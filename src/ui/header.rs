use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("●", Style::default().fg(ACCENT)),
            Span::styled("  ", Style::default()),
            Span::styled(
                self.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
