pub const NUMBER_OF_THE_DAY_FILE: &str = "number_of_the_day.json";
pub const GAME_STATE_FILE: &str = "game_state.json";
pub const ALL_TIME_STATS_FILE: &str = "all_time_stats.json";
