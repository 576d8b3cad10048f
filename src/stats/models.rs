use crate::game::consts::MAX_GUESS_COUNT;
use serde::{Deserialize, Serialize};

/// Aggregates over every finished game. Mutated once per game, on its
/// terminal transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeStats {
    pub play_count: u32,
    pub win_count: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// `(guess number, wins on that guess number)`, guess numbers 1 through
    /// `MAX_GUESS_COUNT` in order.
    pub guess_distribution: [(usize, u32); MAX_GUESS_COUNT],
}

impl Default for AllTimeStats {
    fn default() -> Self {
        let mut guess_distribution = [(0, 0); MAX_GUESS_COUNT];
        for (index, bucket) in guess_distribution.iter_mut().enumerate() {
            *bucket = (index + 1, 0);
        }
        Self {
            play_count: 0,
            win_count: 0,
            current_streak: 0,
            longest_streak: 0,
            guess_distribution,
        }
    }
}

impl AllTimeStats {
    pub fn with_win(mut self, guess_count: usize) -> Self {
        let extends_longest_streak = self.current_streak == self.longest_streak;
        for (guess_number, count) in self.guess_distribution.iter_mut() {
            if *guess_number == guess_count {
                *count += 1;
            }
        }
        self.play_count += 1;
        self.win_count += 1;
        self.current_streak += 1;
        if extends_longest_streak {
            self.longest_streak += 1;
        }
        self
    }

    pub fn with_loss(mut self) -> Self {
        self.play_count += 1;
        self.current_streak = 0;
        self
    }

    #[cfg(test)]
    pub fn distributed_wins(&self) -> u32 {
        self.guess_distribution.iter().map(|(_, count)| count).sum()
    }

    pub fn win_percentage(&self) -> u32 {
        if self.play_count == 0 {
            return 0;
        }
        ((self.win_count as f64 / self.play_count as f64) * 100.0).round() as u32
    }

    pub fn is_first_time_player(&self) -> bool {
        self.play_count == 0
    }
}
