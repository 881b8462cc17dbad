// Input schema
pub const TIMESTAMP_COLUMN: &str = "create_timestamp";
pub const PLAYER_ID_COLUMN: &str = "player_id";
pub const SCORE_COLUMN: &str = "score";
pub const INPUT_HEADER: [&str; 3] = [TIMESTAMP_COLUMN, PLAYER_ID_COLUMN, SCORE_COLUMN];
// Output schema
pub const OUTPUT_HEADER: [&str; 3] = ["rank", PLAYER_ID_COLUMN, "mean_score"];
// Number of player slots reported when no limit is configured
pub const DEFAULT_REPORT_LIMIT: usize = 10;
