//! Command line arguments

use belka::{Rules, DEFAULT_THRESHOLD};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Rule set: classic or belka.
    #[arg(short, long, default_value_t = Rules::Belka)]
    pub rules: Rules,

    /// Score needed to win the match.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Player names, bottom seat first. Give all four or none.
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Seed for reproducible deals.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Let robots play all four seats.
    #[arg(short, long)]
    pub watch: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Time a robot takes to play, in milliseconds. Other pauses scale with it.
    #[arg(long, default_value_t = 900)]
    pub pace_ms: u64,
}
