use std::io::Write;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::counter::CounterView;

/// Prints each pushed count as `<prefix><value>` on its own line.
pub struct ConsoleView<W> {
    out: W,
    config: UiConfig,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, config: UiConfig) -> Self {
        Self { out, config }
    }
}

impl<W: Write> CounterView for ConsoleView<W> {
    fn update_counter(&mut self, value: u64) {
        debug!(target: "counter::view", value, "printing counter");
        let line = self.config.label_text(value);
        // Rendering cannot fail the presenter; a broken pipe is only logged.
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(target: "console::view", %err, "failed to print counter");
        }
    }
}
