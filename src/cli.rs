use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "farmops", version, about = "Farm monitoring and irrigation planning CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fix the simulation seed (defaults to current Unix time)
    #[arg(long)]
    pub seed: Option<i64>,

    /// Simulate a stressed field instead of normal conditions
    #[arg(long)]
    pub stress: bool,

    /// Skip network calls and use demo weather
    #[arg(long)]
    pub offline: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Current snapshot: metrics, health, irrigation, risk and scores
    Report,
    /// Project metrics N days ahead from the current snapshot
    Forecast {
        /// Days to project
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Roll a multi-day irrigation plan
    Schedule {
        /// Planning window in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}
