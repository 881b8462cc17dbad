pub mod score_reader;

pub use score_reader::{ingest, open_input};
