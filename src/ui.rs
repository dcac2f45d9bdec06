// src/ui.rs

use crate::config::{EPIC_RATING_MAX, EPIC_RATING_MIN};
use crate::simulation::SimulationReport;
use crate::video::Video;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Asks for the epic rating, re-prompting until it lies in the documented range.
///
/// # Errors
///
/// Returns an error if the dialoguer interaction fails.
pub fn prompt_epic_rating(theme: &ColorfulTheme) -> Result<i32, Box<dyn std::error::Error>> {
    let rating = Input::<i32>::with_theme(theme)
        .with_prompt(format!(
            "How epic is the fail? ({}-{})",
            EPIC_RATING_MIN, EPIC_RATING_MAX
        ))
        .validate_with(|value: &i32| -> Result<(), String> {
            if (EPIC_RATING_MIN..=EPIC_RATING_MAX).contains(value) {
                Ok(())
            } else {
                Err(format!(
                    "Rating must be between {} and {}",
                    EPIC_RATING_MIN, EPIC_RATING_MAX
                ))
            }
        })
        .interact_text()?;
    Ok(rating)
}

/// Asks whether the video features animals. Defaults to "no".
///
/// # Errors
///
/// Returns an error if the dialoguer interaction fails.
pub fn prompt_has_animals(theme: &ColorfulTheme) -> Result<bool, Box<dyn std::error::Error>> {
    let has_animals = Confirm::with_theme(theme)
        .with_prompt("Does the video feature animals?")
        .default(false)
        .interact()?;
    Ok(has_animals)
}

/// Renders the outcome of a single daily and weekly draw.
pub fn format_single_run(video: &Video, daily: i64, weekly: i64) -> String {
    format!(
        "Video: {}\nDaily likes: {}\nWeekly likes: {}",
        video, daily, weekly
    )
}

/// Renders a multi-trial report as a small table.
pub fn format_report(report: &SimulationReport) -> String {
    let mut lines = vec![format!(
        "Video: {} ({} trials)",
        report.video, report.daily.trials
    )];
    lines.push(format!(
        "{:<8} {:>10} {:>10} {:>8} {:>8}",
        "", "expected", "mean", "min", "max"
    ));
    for (label, expected, summary) in [
        ("daily", report.expected_daily, &report.daily),
        ("weekly", report.expected_weekly, &report.weekly),
    ] {
        lines.push(format!(
            "{:<8} {:>10.2} {:>10.2} {:>8} {:>8}",
            label, expected, summary.mean, summary.min, summary.max
        ));
    }
    lines.join("\n")
}
