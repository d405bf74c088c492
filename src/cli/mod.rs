pub mod run;

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "split-reviews")]
#[command(author, version, about = "Split Gerrit reviews among reviewers from other teams")]
pub struct Cli {
    /// File of committers, one `name, team` per line
    #[arg(short, long, value_name = "FILE")]
    pub committers: PathBuf,

    /// File of reviewers, one `name, team` per line
    #[arg(short, long, value_name = "FILE")]
    pub reviewers: PathBuf,

    /// Number of reviewers per commit (otherwise committers are split evenly)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub reviews_per_commit: Option<u32>,

    /// Print a Gerrit query URL for each reviewer (gerrit_url in config)
    #[arg(long)]
    pub with_gerrit_url: bool,

    /// Email the results (mail_server, from_email, to_email in config)
    #[arg(long)]
    pub send_email: bool,

    /// Path to config file
    #[arg(long, env = "SPLITREVIEWS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Seed the shuffles for a reproducible split
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print assignments as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
