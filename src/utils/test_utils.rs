use indexmap::IndexMap;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `games_per_player` results for each of `n_players` players, shuffled
/// so results for the same player are interleaved.
pub fn generate_results(n_players: usize, games_per_player: usize, seed: u64) -> Vec<(String, i64)> {
    // Initialize seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n_players * games_per_player);

    for i in 0..n_players {
        let player_id = format!("player{:04}", i);
        for _ in 0..games_per_player {
            results.push((player_id.clone(), rng.random_range(-100..=1000)));
        }
    }

    results.shuffle(&mut rng);

    results
}

/// Generates a player -> mean mapping with means drawn from `0..n_distinct`,
/// so larger player counts produce plenty of ties.
pub fn generate_means(n_players: usize, n_distinct: i64, seed: u64) -> IndexMap<String, i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n_players)
        .map(|i| (format!("player{:04}", i), rng.random_range(0..n_distinct)))
        .collect()
}
