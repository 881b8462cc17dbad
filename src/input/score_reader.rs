use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::Path
};

use csv::{ReaderBuilder, StringRecord};
use itertools::Itertools;
use tracing::{info, trace, warn};

use crate::{constants::INPUT_HEADER, error::ProcessorError, model::aggregator::Aggregator};

/// One data row of the input. The timestamp column is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreRecord {
    player_id: String,
    score: i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    ExpectHeader,
    ExpectData
}

/// Opens the input file, translating the common failure modes into their own errors.
pub fn open_input(path: &Path) -> Result<File, ProcessorError> {
    // Opening a directory succeeds on some platforms, only to fail on the first read
    if path.is_dir() {
        return Err(ProcessorError::IsADirectory(path.to_path_buf()));
    }

    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProcessorError::FileNotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => ProcessorError::PermissionDenied(path.to_path_buf()),
        _ => ProcessorError::Io(e)
    })
}

/// Reads every record from `reader` into a new [`Aggregator`].
///
/// The first row must be exactly the `create_timestamp,player_id,score` header. Fields are
/// taken byte for byte, so player ids are matched exactly; only the score text may carry
/// surrounding whitespace. Empty lines are not rows and are skipped.
///
/// Any malformed row aborts ingestion; the partially filled aggregator is dropped with the error.
pub fn ingest<R: Read>(reader: R) -> Result<Aggregator, ProcessorError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut aggregator = Aggregator::new();
    let mut state = ParserState::ExpectHeader;
    let mut record = StringRecord::new();
    let mut row = 0u64;

    while csv_reader.read_record(&mut record)? {
        row += 1;
        let line = record.position().map_or(row, |p| p.line());

        match state {
            ParserState::ExpectHeader => {
                validate_header(&record)?;
                info!("Header accepted, reading results");
                state = ParserState::ExpectData;
            }
            ParserState::ExpectData => {
                let result = parse_record(&record, line)?;
                trace!(line, player_id = result.player_id.as_str(), score = result.score, "Read result");
                aggregator.add_result(&result.player_id, result.score);
            }
        }
    }

    if state == ParserState::ExpectHeader {
        warn!("Input is empty, no header row was found");
    }

    info!(
        "Read {} results for {} players",
        aggregator.result_count(),
        aggregator.len()
    );

    Ok(aggregator)
}

fn validate_header(record: &StringRecord) -> Result<(), ProcessorError> {
    if record.iter().eq(INPUT_HEADER) {
        return Ok(());
    }

    Err(ProcessorError::InvalidHeader {
        expected: INPUT_HEADER.join(","),
        found: record.iter().join(",")
    })
}

fn parse_record(record: &StringRecord, line: u64) -> Result<ScoreRecord, ProcessorError> {
    if record.len() != INPUT_HEADER.len() {
        return Err(ProcessorError::InvalidColumnCount {
            line,
            expected: INPUT_HEADER.len(),
            found: record.len()
        });
    }

    let player_id = &record[1];
    let value = &record[2];

    let score = value.trim().parse::<i64>().map_err(|_| ProcessorError::InvalidScore {
        line,
        player_id: player_id.to_string(),
        value: value.to_string()
    })?;

    Ok(ScoreRecord {
        player_id: player_id.to_string(),
        score
    })
}
