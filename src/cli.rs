use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chandra mission time and calendar utilities.
#[derive(Parser)]
#[command(
    name = "mta",
    version,
    about = "Mission time, day-of-mission and gamma profile utilities"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Day of mission for a year and day of year.
    Dom(DomArgs),
    /// Year and day of year for a day of mission.
    Calendar(CalendarArgs),
    /// Fractional year for mission-clock seconds.
    Fyear(SecondsArgs),
    /// Fractional day of year for mission-clock seconds.
    Yday(SecondsArgs),
    /// Convert a date between formats.
    Convert(ConvertArgs),
    /// Fit a gamma profile to a histogram of samples.
    GammaFit(GammaFitArgs),
}

/// Arguments for the `dom` subcommand.
#[derive(clap::Args)]
pub struct DomArgs {
    /// Four-digit year.
    pub year: i32,

    /// Day of year (1-based).
    pub day_of_year: u16,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Day of mission (0 = 1999:202).
    #[arg(allow_negative_numbers = true)]
    pub dom: i64,
}

/// Arguments for the `fyear` and `yday` subcommands.
#[derive(clap::Args)]
pub struct SecondsArgs {
    /// Mission-clock seconds.
    #[arg(allow_negative_numbers = true)]
    pub secs: f64,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date value: mission seconds or formatted text.
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Input format: `chandra`, `doy`, `iso` or a strftime pattern.
    #[arg(long, default_value = "doy")]
    pub from: String,

    /// Output format: `chandra`, `doy`, `iso` or a strftime pattern.
    #[arg(long, default_value = "iso")]
    pub to: String,
}

/// Arguments for the `gamma-fit` subcommand.
#[derive(clap::Args)]
pub struct GammaFitArgs {
    /// Text file with one sample per line.
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "mta.toml")]
    pub config: PathBuf,

    /// Override the number of histogram bins from config.
    #[arg(short, long)]
    pub bins: Option<usize>,
}
