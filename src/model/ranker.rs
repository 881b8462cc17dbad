use std::cmp::Reverse;

use indexmap::IndexMap;
use itertools::Itertools;
use tracing::debug;

use crate::model::structures::rank_group::RankGroup;

/// # Competition ranking
///
/// Turns a player -> mean score mapping into rank groups ordered by score descending.
///
/// Steps:
/// 1. Sort by mean descending, then by player id ascending so the output does not
///     depend on the iteration order of the mapping.
/// 2. Partition the sorted players into maximal runs of equal mean.
/// 3. Each run becomes one group whose rank is one plus the number of players in
///     the runs before it, e.g. two players tied for first are followed by rank 3.
pub fn rank(means: &IndexMap<String, i64>) -> Vec<RankGroup> {
    let sorted = means
        .iter()
        .sorted_by_key(|&(player_id, mean)| (Reverse(*mean), player_id));

    let mut groups: Vec<RankGroup> = Vec::new();
    let mut next_rank = 1;

    let runs = sorted.chunk_by(|(_, mean)| **mean);
    for (score, run) in &runs {
        let group = RankGroup {
            rank: next_rank,
            score,
            player_ids: run.map(|(player_id, _)| player_id.clone()).collect()
        };

        next_rank = group.next_rank();
        groups.push(group);
    }

    debug!("Ranked {} players into {} groups", means.len(), groups.len());

    groups
}
