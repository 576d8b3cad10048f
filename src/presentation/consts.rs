pub const HOW_MUCH_LAST_EVENTS_TO_STORE: usize = 50;
