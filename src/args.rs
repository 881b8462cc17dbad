use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_REPORT_LIMIT;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Leaderboard Processor",
    long_about = "Reads a CSV of game results and prints the players ranked by their mean score"
)]
pub struct Args {
    /// CSV file with a `create_timestamp,player_id,score` header row
    #[arg(value_name = "FILE", help = "Path to the game results CSV file")]
    pub file_name: PathBuf,

    /// Players tied with the last reported rank are always printed,
    /// so the output may contain more rows than this.
    #[arg(
        short = 'n',
        long,
        env = "LEADERBOARD_LIMIT",
        default_value_t = DEFAULT_REPORT_LIMIT,
        help = "Number of player slots to report"
    )]
    pub limit: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
