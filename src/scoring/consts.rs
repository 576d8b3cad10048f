/// Closeness percentages at which the display tier changes.
pub const NEAR_FROM_PERCENTAGE: f64 = 66.66;
pub const CLOSE_FROM_PERCENTAGE: f64 = 80.0;
pub const EXACT_FROM_PERCENTAGE: f64 = 99.99;
