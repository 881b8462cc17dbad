use std::{io, process};

use clap::Parser;
use leaderboard_processor::{args::Args, processor::process_file, utils::logging::init_logging};
use tracing::{error, info};

fn main() {
    dotenv::dotenv().ok(); // Load LEADERBOARD_LIMIT / RUST_LOG from a .env file, if any

    let args = Args::parse();
    init_logging(&args.log_level);

    match process_file(&args.file_name, args.limit, io::stdout().lock()) {
        Ok(rows) => info!("Reported {} players", rows),
        Err(e) => {
            if e.is_format_error() {
                error!("Rejected input {}: {}", args.file_name.display(), e);
            } else {
                error!("Processing failed: {}", e);
            }
            println!("{}", e);
            process::exit(1);
        }
    }
}
