use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};

use crate::counter::{CounterPresenter, PresenterSlot, ViewError};

/// One line of headless input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Increment,
    Reset,
    Quit,
}

impl ConsoleCommand {
    /// Parses a trimmed, case-insensitive command. `None` for anything
    /// unrecognised.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "increment" | "inc" | "i" | "+" => Some(Self::Increment),
            "reset" | "r" | "0" => Some(Self::Reset),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Intent-capturing half of the headless view.
#[derive(Debug, Default)]
pub struct ConsoleSession {
    slot: PresenterSlot,
}

impl ConsoleSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn CounterPresenter>) -> Result<(), ViewError> {
        self.slot.set_presenter(presenter)
    }

    pub fn execute(&mut self, command: ConsoleCommand) -> Result<(), ViewError> {
        match command {
            ConsoleCommand::Increment => self.slot.increment_requested(),
            ConsoleCommand::Reset => self.slot.reset_requested(),
            ConsoleCommand::Quit => Ok(()),
        }
    }

    /// Runs commands from `input` until `quit` or end of input. Unknown
    /// commands are reported on `diagnostics` and skipped.
    pub fn show<R: BufRead, E: Write>(&mut self, input: R, mut diagnostics: E) -> anyhow::Result<()> {
        self.slot.ensure_wired()?;
        info!(target: "console::session", "headless session started");

        for raw in input.split(b'\n') {
            let raw = raw.context("Failed to read command")?;
            // Undecodable bytes fall through to the unknown-command branch.
            let line = String::from_utf8_lossy(&raw);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match ConsoleCommand::parse(trimmed) {
                Some(ConsoleCommand::Quit) => {
                    debug!(target: "console::session", "quit requested");
                    break;
                }
                Some(command) => self.execute(command)?,
                None => {
                    writeln!(diagnostics, "unknown command: {trimmed}")
                        .context("Failed to write diagnostics")?;
                }
            }
        }

        info!(target: "console::session", "headless session ended");
        Ok(())
    }
}
