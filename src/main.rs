// src/main.rs

use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use std::process;

// Module declarations
mod cli;
mod config;
mod random_source;
mod simulation;
mod ui;
mod video;

// Crate imports for convenience
use crate::cli::Cli;
use crate::config::APP_NAME;
use crate::random_source::{FixedSource, RandomInt, UniformSource};
use crate::simulation::simulate;
use crate::ui::{format_report, format_single_run, prompt_epic_rating, prompt_has_animals};
use crate::video::Video;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("\nApplication Error: {}", err);
        process::exit(1);
    }
}

/// Picks the random source requested on the command line.
/// A pinned viewer count wins over a seed, and the thread-local generator is the fallback.
fn build_source(cli_args: &Cli) -> Box<dyn RandomInt> {
    match (cli_args.viewers, cli_args.seed) {
        (Some(viewers), _) => {
            log::debug!("Pinning viewer draws to {}", viewers);
            Box::new(FixedSource::new(viewers))
        }
        (None, Some(seed)) => {
            log::debug!("Using seeded generator ({})", seed);
            Box::new(UniformSource::seeded(seed))
        }
        (None, None) => Box::new(UniformSource::thread()),
    }
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli_args = Cli::parse();
    log::info!("{} starting", APP_NAME);
    let theme = ColorfulTheme::default();

    let epic_rating = match cli_args.epic_rating {
        Some(rating) => rating,
        None => prompt_epic_rating(&theme)?,
    };
    let has_animals = match cli_args.has_animals {
        Some(flag) => flag,
        None => prompt_has_animals(&theme)?,
    };

    let video = Video::new(epic_rating, has_animals);
    let mut source = build_source(&cli_args);

    if cli_args.trials <= 1 {
        let daily = video.daily_likes_with(source.as_mut());
        let weekly = video.weekly_likes_with(source.as_mut());
        if cli_args.json {
            let output = serde_json::json!({
                "video": video,
                "daily_likes": daily,
                "weekly_likes": weekly,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", format_single_run(&video, daily, weekly));
        }
        return Ok(());
    }

    let trials = usize::try_from(cli_args.trials)?;
    let report = simulate(&video, trials, source.as_mut());
    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    Ok(())
}
