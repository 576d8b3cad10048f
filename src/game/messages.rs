pub const UNKNOWN_CITY: &str = "That city is not in the list.";
pub const DUPLICATE_GUESS: &str = "That city has already been guessed.";
pub const PROGRESS_NOT_SAVED: &str = "Progress could not be saved; it will be lost on restart.";

/// Praise for a win on attempt `guess_count`.
pub fn win_message(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "Cheating?",
        2 => "Magical!",
        3..=5 => "Splendid!",
        _ => "Great",
    }
}

pub fn loss_message(city_of_the_day: &str) -> String {
    format!("Out of attempts. Today's city was: {city_of_the_day}")
}
