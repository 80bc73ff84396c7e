use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tracing::error;

/// Poll interval of the reader thread; bounds how long it outlives the UI.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Reader thread hit an io error and is about to exit.
    InputError(String),
}

/// Reads terminal events on a background thread and queues them for the
/// UI thread. The counter itself is only ever touched by the receiver.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::spawn(move || loop {
            if thread_stop.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    error!(target: "ui::events", %err, "terminal poll failed");
                    let _ = tx.send(AppEvent::InputError(format!("poll failed: {err}")));
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    error!(target: "ui::events", %err, "terminal read failed");
                    let _ = tx.send(AppEvent::InputError(format!("read failed: {err}")));
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break;
            }
        });

        Self { rx, stop }
    }

    /// Blocks until the next event. Fails once the reader thread is gone.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
