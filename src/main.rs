mod app;
mod cli;
mod config;
mod consts;
mod error;
mod model;
mod output;
mod prompt;
mod question;
mod session;
mod sql;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use app::PageStatus;
use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    config.log_outcome();

    match app::run(&cli) {
        Ok(PageStatus::Clean) => ExitCode::SUCCESS,
        Ok(PageStatus::Error) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", error::error_text(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
