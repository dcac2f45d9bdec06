// src/video.rs

use crate::config::{
    ANIMAL_LIKE_RATIO, DAYS_PER_WEEK, DEFAULT_LIKE_RATIO, VIEWERS_MAX, VIEWERS_MIN,
};
use crate::random_source::{RandomInt, UniformSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An epic-fail video and the two attributes that drive its popularity.
/// Both fields are fixed at construction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    /// How dramatic the failure is, expected to lie in 1..=10.
    epic_rating: i32,
    /// Whether the video features animals.
    has_animals: bool,
}

impl Video {
    /// Creates a new `Video`.
    ///
    /// # Arguments
    ///
    /// * `epic_rating` - Rating of the failure, stored as given. Values outside
    ///   1..=10 are accepted but the like counts stop being meaningful.
    /// * `has_animals` - Whether animals appear in the video.
    pub fn new(epic_rating: i32, has_animals: bool) -> Self {
        Video {
            epic_rating,
            has_animals,
        }
    }

    pub fn epic_rating(&self) -> i32 {
        self.epic_rating
    }

    pub fn has_animals(&self) -> bool {
        self.has_animals
    }

    /// Draws a uniform integer in `[min, max]` from the thread-local generator.
    pub fn random_int(min: i64, max: i64) -> i64 {
        UniformSource::thread().random_int(min, max)
    }

    /// The share of viewers who leave a like.
    /// Animal videos convert at 0.75, everything else at 0.40.
    pub fn like_ratio(&self) -> f64 {
        if self.has_animals {
            ANIMAL_LIKE_RATIO
        } else {
            DEFAULT_LIKE_RATIO
        }
    }

    /// Simulates one day of likes using the thread-local generator.
    pub fn daily_likes(&self) -> i64 {
        self.daily_likes_with(&mut UniformSource::thread())
    }

    /// Simulates one day of likes, drawing the viewer multiplier from `source`.
    ///
    /// `viewers = random_int(10, 30) * epic_rating`, and the result is
    /// `viewers * like_ratio()` rounded to the nearest integer (halves away
    /// from zero).
    pub fn daily_likes_with<S: RandomInt + ?Sized>(&self, source: &mut S) -> i64 {
        let viewers = source.random_int(VIEWERS_MIN, VIEWERS_MAX) * i64::from(self.epic_rating);
        let likes = (viewers as f64 * self.like_ratio()).round() as i64;
        log::debug!("daily likes for {}: {} viewers -> {} likes", self, viewers, likes);
        likes
    }

    /// Simulates a week of likes using the thread-local generator.
    pub fn weekly_likes(&self) -> i64 {
        self.weekly_likes_with(&mut UniformSource::thread())
    }

    /// Sums seven independent daily draws from `source`.
    pub fn weekly_likes_with<S: RandomInt + ?Sized>(&self, source: &mut S) -> i64 {
        let likes = (0..DAYS_PER_WEEK)
            .map(|_| self.daily_likes_with(source))
            .sum();
        log::debug!("weekly likes for {}: {}", self, likes);
        likes
    }

    /// Mean daily likes, taking the midpoint of the viewer range.
    ///
    /// Examples:
    /// * rating 7 without animals => 20 * 7 * 0.40 = 56.0
    /// * rating 4 with animals => 20 * 4 * 0.75 = 60.0
    pub fn expected_daily_likes(&self) -> f64 {
        let midpoint = (VIEWERS_MIN + VIEWERS_MAX) as f64 / 2.0;
        midpoint * f64::from(self.epic_rating) * self.like_ratio()
    }

    pub fn expected_weekly_likes(&self) -> f64 {
        self.expected_daily_likes() * DAYS_PER_WEEK as f64
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epic rating {}, {}",
            self.epic_rating,
            if self.has_animals {
                "with animals"
            } else {
                "no animals"
            }
        )
    }
}
