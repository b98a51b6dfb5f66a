mod cli;
mod config;
mod convert;
mod gamma_cmd;
mod logging;
mod time_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dom(args) => time_cmd::dom(args),
        Command::Calendar(args) => time_cmd::calendar(args),
        Command::Fyear(args) => time_cmd::fyear(args),
        Command::Yday(args) => time_cmd::yday(args),
        Command::Convert(args) => time_cmd::convert(args),
        Command::GammaFit(args) => gamma_cmd::run(args),
    }
}
