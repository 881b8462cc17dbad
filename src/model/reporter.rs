use std::io::Write;

use csv::WriterBuilder;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::{constants::OUTPUT_HEADER, error::ProcessorError, model::structures::rank_group::RankGroup};

/// A single printed leaderboard line.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    rank: usize,
    player_id: &'a str,
    mean_score: i64
}

/// Returns the leading groups that fit into `limit` player slots.
///
/// The budget is only checked between groups, so the last selected group is always
/// included in full even when it overflows the limit.
pub fn select(groups: &[RankGroup], limit: usize) -> &[RankGroup] {
    let mut printed = 0;
    let mut selected = 0;

    for group in groups {
        if printed >= limit {
            break;
        }

        printed += group.len();
        selected += 1;
    }

    if selected < groups.len() {
        debug!(
            "Report limit of {} reached, omitting {} of {} groups",
            limit,
            groups.len() - selected,
            groups.len()
        );
    }

    &groups[..selected]
}

/// Writes the leaderboard header followed by one line per reported player.
/// Returns the number of player lines written.
pub fn emit<W: Write>(groups: &[RankGroup], limit: usize, out: W) -> Result<usize, ProcessorError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(OUTPUT_HEADER)?;

    let mut rows = 0;
    for group in select(groups, limit) {
        for player_id in group.player_ids.iter().sorted() {
            writer.serialize(ReportRow {
                rank: group.rank,
                player_id,
                mean_score: group.score
            })?;
            rows += 1;
        }
    }

    writer.flush()?;

    Ok(rows)
}
