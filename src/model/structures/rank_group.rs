/// A maximal set of players sharing the same mean score.
///
/// `rank` is the competition rank of the group: one plus the number of players
/// ranked strictly above it. `player_ids` is kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: usize,
    pub score: i64,
    pub player_ids: Vec<String>
}

impl RankGroup {
    pub fn len(&self) -> usize {
        self.player_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.player_ids.is_empty()
    }

    /// The rank the group immediately after this one receives.
    pub fn next_rank(&self) -> usize {
        self.rank + self.len()
    }
}
