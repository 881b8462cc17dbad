use std::{path::Path, process::Output, sync::Once};

use tempfile::NamedTempFile;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Writes `contents` to a temporary CSV file that lives as long as the handle.
pub fn write_input(contents: impl AsRef<[u8]>) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary input file");
    std::fs::write(file.path(), contents).expect("Failed to write temporary input file");

    file
}

/// Runs the processor binary against `path` with a clean configuration environment.
pub fn run_processor(path: &Path, extra_args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_leaderboard-processor"))
        .args(extra_args)
        .arg(path)
        .env("RUST_LOG", "error")
        .env_remove("LEADERBOARD_LIMIT")
        .output()
        .expect("Failed to execute processor")
}
