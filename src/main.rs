mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod logging;
mod output;
mod tui;
mod widget;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
