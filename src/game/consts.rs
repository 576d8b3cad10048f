use std::time::Duration;

pub const MAX_GUESS_COUNT: usize = 6;

/// Pause between a terminal guess and the celebration/summary effects.
pub const TERMINAL_EFFECTS_DELAY: Duration = Duration::from_secs(3);
