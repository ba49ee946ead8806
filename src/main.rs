mod app;
mod args;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logging;
mod util;
use crate::app::App;
use crate::args::{Arguments, CommandLine};
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match CommandLine::from_parser(lexopt::Parser::from_env())? {
        CommandLine::Run(args) => args,
        CommandLine::Help => {
            print!("{}", args::USAGE);
            return Ok(());
        }
        CommandLine::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = load_config(&args)?;
    let (difficulty, log_file) = args.resolve(&config);
    if let Some(path) = log_file {
        logging::init(path, &config.logging.level)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    let store = config.high_score_file();
    let high_score = store.as_ref().map_or(0, highscore::HighScoreFile::load_or_default);
    tracing::info!(%difficulty, high_score, "Starting up");
    let game = Game::new(difficulty, high_score, Instant::now());
    let app = App::new(game, store);
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture).and_then(|()| app.run(terminal));
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r.map_err(Into::into)
}

/// Load the configuration file named on the command line or, if there is
/// none, the default configuration file if it exists
fn load_config(args: &Arguments) -> anyhow::Result<Config> {
    let (path, allow_missing) = match args.config {
        Some(ref path) => (path.clone(), false),
        None => (Config::default_path()?, true),
    };
    Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
