use std::sync::mpsc::RecvError;

use anyhow::anyhow;
use tracing::info;

use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{key_action, mouse_action};
use crate::ui::render::draw;
use crate::ui::screen::CounterScreen;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(mut screen: CounterScreen) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    info!(target: "ui::runtime", "counter screen shown");

    loop {
        // Hit-testing follows whatever area was last drawn.
        let area = terminal.draw(|frame| draw(frame, &screen))?.area;
        screen.on_resize(area.width, area.height);
        if screen.should_quit() {
            break;
        }

        handle_event(&mut screen, events.next())?;
    }

    drop(events);
    drop(guard);
    info!(target: "ui::runtime", count = screen.count(), "counter screen closed");
    Ok(())
}

/// Applies one event from the reader thread. Losing the reader is an error:
/// without input the screen could never be closed by the user.
pub fn handle_event(
    screen: &mut CounterScreen,
    event: Result<AppEvent, RecvError>,
) -> anyhow::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => screen.apply(key_action(key))?,
        Ok(AppEvent::Mouse(mouse)) => screen.apply(mouse_action(mouse))?,
        Ok(AppEvent::Resize(cols, rows)) => screen.on_resize(cols, rows),
        Ok(AppEvent::InputError(message)) => {
            return Err(anyhow!("terminal input failed: {message}"));
        }
        Err(RecvError) => return Err(anyhow!("terminal event reader stopped")),
    }
    Ok(())
}
