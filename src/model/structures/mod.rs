pub mod player_accumulator;
pub mod rank_group;
