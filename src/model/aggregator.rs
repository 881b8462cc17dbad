use indexmap::IndexMap;
use tracing::trace;

use crate::model::structures::player_accumulator::PlayerAccumulator;

pub struct Aggregator {
    // One accumulator per distinct player id, in first-seen order.
    // Ids are matched exactly (case-sensitive).
    table: IndexMap<String, PlayerAccumulator>
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Aggregator {
        Aggregator { table: IndexMap::new() }
    }

    /// Records one game result, creating the player's accumulator on first sight.
    pub fn add_result(&mut self, player_id: &str, score: i64) {
        // Avoid allocating a key for players that are already tracked
        if let Some(acc) = self.table.get_mut(player_id) {
            acc.add_result(score);
        } else {
            trace!(player_id, "Tracking new player");
            self.table.entry(player_id.to_owned()).or_default().add_result(score);
        }
    }

    /// Folds the totals of another aggregator into this one. The result is the same
    /// as if both record streams had been fed into a single aggregator.
    pub fn merge(&mut self, other: &Aggregator) {
        for (player_id, acc) in &other.table {
            self.table.entry(player_id.clone()).or_default().merge(acc);
        }
    }

    /// Returns the current mean score for every tracked player. Does not reset state.
    pub fn snapshot(&self) -> IndexMap<String, i64> {
        self.table
            .iter()
            .map(|(player_id, acc)| (player_id.clone(), acc.mean()))
            .collect()
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerAccumulator> {
        self.table.get(player_id)
    }

    /// Number of distinct players seen.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Total number of results recorded across all players.
    pub fn result_count(&self) -> u64 {
        self.table.values().map(|acc| acc.game_count).sum()
    }
}
