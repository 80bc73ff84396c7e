//! Composition root: builds model, presenter and view, wires them, and hands
//! control to the chosen front end.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::cli::Cli;
use crate::config::{Config, UiConfig};
use crate::console::{ConsoleSession, ConsoleView};
use crate::counter::{Counter, Presenter};
use crate::ui::{CounterLabel, CounterScreen};

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config: Config = cli.load_config()?;

    if cli.headless {
        let stdin = io::stdin();
        run_headless(config.ui, stdin.lock(), io::stdout(), io::stderr())
    } else {
        run_tui(config.ui)
    }
}

pub fn run_tui(config: UiConfig) -> anyhow::Result<()> {
    let label = CounterLabel::new();
    let presenter = Presenter::new(Counter::new(), label.clone());
    let mut screen = CounterScreen::new(label, config);
    screen.set_presenter(Box::new(presenter))?;
    info!(target: "app", "starting terminal front end");
    screen.show()
}

pub fn run_headless<R, W, E>(config: UiConfig, input: R, output: W, diagnostics: E) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write + 'static,
    E: Write,
{
    let presenter = Presenter::new(Counter::new(), ConsoleView::new(output, config));
    let mut session = ConsoleSession::new();
    session.set_presenter(Box::new(presenter))?;
    info!(target: "app", "starting headless front end");
    session.show(input, diagnostics)
}
