//! Flag and subcommand definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_DB_FILE: &str = "studyplan.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "studyplan", about = "Seven-day revision plannings from course text")]
pub struct Cli {
    /// SQLite database file for stored plannings and progress
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging is off when absent)
    #[arg(long)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a planning from a text file (or stdin) and print it as JSON
    Generate {
        /// Input text file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        /// Chapter name overriding heading detection
        #[arg(long)]
        chapter: Option<String>,
        /// Store the planning in the database
        #[arg(long)]
        save: bool,
    },
    /// List stored plannings, newest first
    List,
    /// Print a stored planning with its progress applied
    Show {
        /// Planning id
        id: Uuid,
    },
    /// Toggle the completion of one day
    Toggle {
        /// Planning id
        id: Uuid,
        /// Day number (1-7)
        day: u8,
    },
    /// Clear all stored progress of a planning
    Reset {
        /// Planning id
        id: Uuid,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate { .. } => "generate",
            Self::List => "list",
            Self::Show { .. } => "show",
            Self::Toggle { .. } => "toggle",
            Self::Reset { .. } => "reset",
        }
    }
}
