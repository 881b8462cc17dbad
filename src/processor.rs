use std::{
    io::{Read, Write},
    path::Path
};

use tracing::info;

use crate::{
    error::ProcessorError,
    input::{ingest, open_input},
    model::{ranker, reporter}
};

/// Runs the full pipeline over `reader`: aggregate, rank, then report up to `limit`
/// player slots into `out`.
///
/// Nothing is written to `out` unless every record was read successfully.
/// Returns the number of player lines written.
pub fn process<R: Read, W: Write>(reader: R, limit: usize, out: W) -> Result<usize, ProcessorError> {
    let aggregator = ingest(reader)?;
    let groups = ranker::rank(&aggregator.snapshot());

    reporter::emit(&groups, limit, out)
}

/// Same as [`process`], reading from the file at `path`.
pub fn process_file<W: Write>(path: &Path, limit: usize, out: W) -> Result<usize, ProcessorError> {
    let file = open_input(path)?;
    info!("Processing {}", path.display());

    process(file, limit, out)
}
