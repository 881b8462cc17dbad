/// Running totals for a single player. Individual scores are never retained,
/// so memory stays constant no matter how many games a player has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerAccumulator {
    pub game_count: u64,
    pub sum_score: i128
}

impl PlayerAccumulator {
    pub fn new() -> PlayerAccumulator {
        PlayerAccumulator::default()
    }

    pub fn add_result(&mut self, score: i64) {
        self.game_count += 1;
        self.sum_score += i128::from(score);
    }

    /// Folds the totals of another accumulator for the same player into this one.
    pub fn merge(&mut self, other: &PlayerAccumulator) {
        self.game_count += other.game_count;
        self.sum_score += other.sum_score;
    }

    /// Rounded mean score, ties rounded to the nearest even value.
    /// A player with no games has a mean of 0.
    pub fn mean(&self) -> i64 {
        if self.game_count == 0 {
            return 0;
        }

        round_half_to_even(self.sum_score, i128::from(self.game_count))
    }
}

/// `numerator / denominator` rounded half-to-even in exact integer arithmetic.
/// `denominator` must be positive.
fn round_half_to_even(numerator: i128, denominator: i128) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    let twice_remainder = 2 * numerator.rem_euclid(denominator);

    let rounded = match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1
    };

    // The mean of i64 scores always lies within the i64 range
    rounded as i64
}
