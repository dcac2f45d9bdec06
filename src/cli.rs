// src/cli.rs

use crate::config::{EPIC_RATING_MAX, EPIC_RATING_MIN, VIEWERS_MAX, VIEWERS_MIN};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Simulates how many likes an epic-fail video collects per day and per week.",
    long_about = None
)]
pub struct Cli {
    /// How dramatic the failure is (1-10). Prompted for when omitted.
    #[clap(
        short = 'r',
        long,
        value_parser = clap::value_parser!(i32).range(i64::from(EPIC_RATING_MIN)..=i64::from(EPIC_RATING_MAX))
    )]
    pub epic_rating: Option<i32>,

    /// Whether the video features animals (true/false). Prompted for when omitted.
    #[clap(short = 'a', long)]
    pub has_animals: Option<bool>,

    /// Number of daily and weekly simulations to run.
    #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub trials: u64,

    /// Seed the random generator for reproducible results.
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Pin every viewer draw to this value (10-30) instead of drawing it at random.
    #[clap(
        long,
        conflicts_with = "seed",
        value_parser = clap::value_parser!(i64).range(VIEWERS_MIN..=VIEWERS_MAX)
    )]
    pub viewers: Option<i64>,

    /// Print the result as JSON.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}
