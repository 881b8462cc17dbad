pub mod aggregator;
pub mod ranker;
pub mod reporter;
pub mod structures;
