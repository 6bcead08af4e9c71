//! CLI command definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vertag")]
#[command(
    about = "Rewrite info.json records under <root>/<id>/<version>/ into output/ with composed versions",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Working directory holding the <id>/<version>/info.json tree (default: current directory)
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "vertag=warn",
            1 => "vertag=info",
            _ => "vertag=debug",
        }
    }
}
