use crate::ui::focus::Button;
use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const BUTTON_WIDTH: u16 = 17;
pub const BUTTON_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Placement of the counter label and both buttons inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub label: Rect,
    pub increment: Rect,
    pub reset: Rect,
}

impl CounterLayout {
    pub fn button(&self, button: Button) -> Rect {
        match button {
            Button::Increment => self.increment,
            Button::Reset => self.reset,
        }
    }
}

/// Stacks label, Increment and Reset vertically, centred horizontally.
pub fn counter_layout(body: Rect) -> CounterLayout {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ])
    .split(body);

    CounterLayout {
        label: rows[1],
        increment: centered_columns(rows[3], BUTTON_WIDTH),
        reset: centered_columns(rows[4], BUTTON_WIDTH),
    }
}

/// Returns the button under a mouse position, if any.
pub fn button_at(layout: &CounterLayout, column: u16, row: u16) -> Option<Button> {
    let position = Position::new(column, row);
    Button::ALL
        .into_iter()
        .find(|button| layout.button(*button).contains(position))
}

fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
