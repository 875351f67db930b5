//! `gradebook templates` command - print the grading template catalog

use gradebook_core::error::Result;
use gradebook_core::template::TEMPLATES;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = TEMPLATES
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "name": t.name,
                        "weights": t.weights,
                        "labels": t.labels,
                        "fields": t.fields(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "templates": output }))?
            );
        }
        OutputFormat::Human => {
            for t in TEMPLATES {
                println!("{:<13} {} ({} components)", t.id, t.name, t.fields());
            }
        }
    }

    Ok(())
}
