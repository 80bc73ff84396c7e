use crate::ui::focus::Button;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{counter_layout, layout_regions};
use crate::ui::screen::CounterScreen;
use crate::ui::theme::{ACCENT, BUTTON_BORDER, BUTTON_FOCUSED_BG, COUNTER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, screen: &CounterScreen) {
    let (header, body, footer) = layout_regions(frame.area());
    let layout = counter_layout(body);

    frame.render_widget(Header::new(&screen.config().title).widget(), header);

    let label = Paragraph::new(screen.label_text())
        .style(Style::default().fg(COUNTER_TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(label, layout.label);

    for button in Button::ALL {
        frame.render_widget(
            button_widget(button, screen.focus().is_focused(button)),
            layout.button(button),
        );
    }

    frame.render_widget(Footer::new(screen.config().show_hints).widget(footer), footer);
}

fn button_widget(button: Button, focused: bool) -> Paragraph<'static> {
    let (border_style, border_type, text_style) = if focused {
        (
            Style::default().fg(ACCENT),
            BorderType::Thick,
            Style::default()
                .fg(ACCENT)
                .bg(BUTTON_FOCUSED_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(BUTTON_BORDER),
            BorderType::Rounded,
            Style::default().fg(COUNTER_TEXT),
        )
    };

    Paragraph::new(button.caption())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
}
