//! `gradebook average` command - weighted average for ad-hoc scores
//!
//! Takes a template and up to four `--score` values in component order and
//! prints the re-normalized weighted average with its letter grade and
//! 4.0-scale points. Needs no record file.

use gradebook_core::bail_usage;
use gradebook_core::config::Config;
use gradebook_core::error::Result;
use gradebook_core::scale::{grade_point, letter_for};
use gradebook_core::score::{average_for_template, ScoreSet};
use gradebook_core::template::require_template;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, template_id: Option<&str>, raw_scores: &[String]) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let template = match template_id {
        Some(id) => require_template(id)?,
        None => config.template(),
    };

    if raw_scores.len() > template.fields() {
        bail_usage!(format!(
            "template {} has {} components, got {} scores",
            template.id,
            template.fields(),
            raw_scores.len()
        ));
    }

    let scores = ScoreSet::from_raw(raw_scores)?;
    let average = average_for_template(&scores, template);
    let graded = scores.present() > 0;

    tracing::debug!(template = template.id, average, "average computed");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "templateId": template.id,
                "average": average,
                "letter": graded.then(|| letter_for(average).to_string()),
                "gradePoints": graded.then(|| grade_point(average)),
                "componentsPresent": scores.present(),
                "componentsTotal": template.fields(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if graded {
                println!(
                    "{:.1} ({}, {:.1} points) [{} of {} components, template {}]",
                    average,
                    letter_for(average),
                    grade_point(average),
                    scores.present(),
                    template.fields(),
                    template.id
                );
            } else if !cli.quiet {
                println!("0.0 (no components entered, template {})", template.id);
            }
        }
    }

    Ok(())
}
