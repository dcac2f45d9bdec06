// src/simulation.rs

use crate::random_source::RandomInt;
use crate::video::Video;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate statistics over a batch of simulated like counts.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LikesSummary {
    pub trials: usize,
    pub mean: f64,
    pub min: i64,
    pub max: i64,
}

impl LikesSummary {
    /// Summarises `samples` in a single pass without buffering them.
    /// Returns `None` when the iterator is empty.
    pub fn from_samples<I: IntoIterator<Item = i64>>(samples: I) -> Option<Self> {
        let mut samples = samples.into_iter();
        let first = samples.next()?;
        let (trials, total, min, max) = samples.fold(
            (1usize, i128::from(first), first, first),
            |(trials, total, min, max), likes| {
                (trials + 1, total + i128::from(likes), min.min(likes), max.max(likes))
            },
        );
        Some(LikesSummary {
            trials,
            mean: total as f64 / trials as f64,
            min,
            max,
        })
    }
}

/// Result of running many daily and weekly simulations for one video.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub video: Video,
    pub generated_at: DateTime<Utc>,
    pub expected_daily: f64,
    pub expected_weekly: f64,
    pub daily: LikesSummary,
    pub weekly: LikesSummary,
}

/// Runs `trials` independent daily draws followed by `trials` independent
/// weekly draws, all taken from `source`.
///
/// A `trials` value of zero is treated as one.
pub fn simulate<S: RandomInt + ?Sized>(
    video: &Video,
    trials: usize,
    source: &mut S,
) -> SimulationReport {
    let trials = trials.max(1);
    log::info!("Simulating {} trials for {}", trials, video);

    let daily = LikesSummary::from_samples((0..trials).map(|_| video.daily_likes_with(source)))
        .unwrap_or_default();
    let weekly = LikesSummary::from_samples((0..trials).map(|_| video.weekly_likes_with(source)))
        .unwrap_or_default();

    let report = SimulationReport {
        video: *video,
        generated_at: Utc::now(),
        expected_daily: video.expected_daily_likes(),
        expected_weekly: video.expected_weekly_likes(),
        daily,
        weekly,
    };
    log::info!(
        "Simulation finished: mean daily {:.2}, mean weekly {:.2}",
        report.daily.mean,
        report.weekly.mean
    );
    report
}
