use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use samegame_core::ScoreHistory;

use crate::args::Args;
use crate::config::{FileConfig, Settings};
use crate::controller::{Controller, Flow};
use crate::feedback::TerminalBell;
use crate::history::JsonScoreHistory;
use crate::input::{Command, HELP};
use crate::view::{BoardView, ConsoleView};

mod args;
mod config;
mod controller;
mod feedback;
mod history;
mod input;
mod theme;
mod view;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file_config);
    log::debug!("Settings: {:?}", settings);

    let seed = settings.seed.unwrap_or_else(rand::random);
    let history = JsonScoreHistory::load(&settings.history_path);
    let bell = TerminalBell::new(io::stdout(), settings.bell);

    let mut controller = Controller::new(settings.game, seed, history, bell)
        .context("Could not start a game")?;
    controller.register_view(Box::new(BoardView::new(io::stdout(), settings.theme)));
    if settings.console {
        controller.register_view(Box::new(ConsoleView::new(io::stdout())));
    }
    println!("{}", HELP);

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                println!("{}", HELP);
                continue;
            }
        };

        match controller.handle(command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => println!("{}", err),
        }
    }

    log::info!(
        "Leaving with {} points on the board, {} score(s) kept in {}",
        controller.engine().points(),
        controller.history().scores().len(),
        controller.history().path().display()
    );
    Ok(())
}
