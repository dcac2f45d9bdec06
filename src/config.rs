// src/config.rs

/// The application name, used as a prefix in log output.
pub const APP_NAME: &str = "epic_fail_likes";

/// Lowest viewer multiplier drawn for a single day (inclusive).
pub const VIEWERS_MIN: i64 = 10;
/// Highest viewer multiplier drawn for a single day (inclusive).
pub const VIEWERS_MAX: i64 = 30;

/// Share of viewers who like a video that features animals.
pub const ANIMAL_LIKE_RATIO: f64 = 0.75;
/// Share of viewers who like any other video.
pub const DEFAULT_LIKE_RATIO: f64 = 0.40;

/// Number of daily draws summed into a weekly total.
pub const DAYS_PER_WEEK: usize = 7;

/// Lowest documented epic rating. Only the CLI enforces the range.
pub const EPIC_RATING_MIN: i32 = 1;
/// Highest documented epic rating.
pub const EPIC_RATING_MAX: i32 = 10;
