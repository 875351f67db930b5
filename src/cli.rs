//! CLI argument parsing for gradebook
//!
//! Global flags: --records, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use gradebook_core::format::OutputFormat;

/// Gradebook - academic records CLI: grade templates, weighted averages,
/// and GPA analytics
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the JSON record export to operate on
    #[arg(long, global = true, env = "GRADEBOOK_RECORDS")]
    pub records: Option<PathBuf>,

    /// Path to a gradebook.toml configuration file
    #[arg(long, global = true, env = "GRADEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (equivalent to --log-level debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the grading template catalog
    Templates,

    /// Compute a weighted average (and letter grade) for ad-hoc scores
    Average {
        /// Template id (e.g. 10-10-30-50); configured default when omitted
        #[arg(long, short)]
        template: Option<String>,

        /// Component score in 0..=10; use '-' for a not-yet-entered
        /// component (can be specified up to four times, in order)
        #[arg(long, short, action = clap::ArgAction::Append, allow_hyphen_values = true)]
        score: Vec<String>,
    },

    /// List records from the record file
    List {
        #[command(subcommand)]
        what: ListCommands,
    },

    /// Semester or cumulative GPA
    Gpa {
        /// Semester id; cumulative GPA when omitted
        #[arg(long, short)]
        semester: Option<u64>,
    },

    /// Semester GPA chart series for the analytics dashboard
    Chart,

    /// Validate the record file and report inconsistencies
    Check,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// List semesters with their GPA
    Semesters,

    /// List subjects
    Subjects {
        /// Filter by semester id
        #[arg(long)]
        semester: Option<u64>,

        /// Case-insensitive name substring
        #[arg(long, short = 'T')]
        term: Option<String>,
    },

    /// List grades with computed averages
    Grades {
        /// Filter by subject id
        #[arg(long)]
        subject: Option<u64>,

        /// Only grades created at or after this instant (ISO 8601)
        #[arg(long)]
        since: Option<String>,
    },

    /// List documents
    Documents {
        /// Only bookmarked documents
        #[arg(long, short)]
        bookmarked: bool,

        /// Filter by subject id
        #[arg(long)]
        subject: Option<u64>,

        /// Filter by file extension (e.g. pdf)
        #[arg(long)]
        ext: Option<String>,

        /// Case-insensitive substring over file, custom, and subject names
        #[arg(long, short = 'T')]
        term: Option<String>,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
