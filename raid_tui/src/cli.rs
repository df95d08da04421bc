//! Command-line arguments

use clap::Parser;
use raid_core::Language;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raid_tui", version, about = "ARC Raiders stats calculator")]
pub struct Cli {
    /// Share link (or bare query string) to pre-fill the form with
    #[arg(short, long)]
    pub link: Option<String>,

    /// Display language: en, ru or uk
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the computed stats as JSON and exit
    #[arg(long)]
    pub json: bool,
}
