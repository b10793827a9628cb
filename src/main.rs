mod app;
mod cli;
mod command;
mod config;
mod consts;
mod feedback;
mod game;
mod logging;
mod options;
mod scheduler;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Arguments, CliCommand};
use crate::config::{Config, ConfigError};
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmd = match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };
    match cmd {
        CliCommand::Run(args) => io_exit(run(&args)),
        CliCommand::Help => {
            print!("{}", CliCommand::help_text());
            ExitCode::SUCCESS
        }
        CliCommand::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn run(args: &Arguments) -> anyhow::Result<()> {
    let (mut config, error) = match load_config(args) {
        Ok((config, path)) => (config, Ok(path)),
        Err(e) => (Config::default(), Err(e)),
    };
    args.apply(&mut config);
    logging::init(&config.log)?;
    let warning = match error {
        Ok(path) => {
            log::info!("Using configuration file path {}", path.display());
            None
        }
        Err(e) => {
            log::warn!("Failed to load configuration; using defaults: {e}");
            Some(Warning::new(
                "Could not load configuration; using defaults.",
                &e,
            ))
        }
    };
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(&config, warning).run(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    r.context("terminal I/O failed")
}

fn load_config(args: &Arguments) -> Result<(Config, PathBuf), ConfigError> {
    match args.config {
        Some(ref path) => Ok((Config::load(path, false)?, path.clone())),
        None => {
            let path = Config::default_path()?;
            Ok((Config::load(&path, true)?, path))
        }
    }
}

fn io_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::from(2)
        }
    }
}
