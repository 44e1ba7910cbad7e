//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use csvq::{AssemblerConfig, MissingSamplePolicy, ReaderConfig};
use std::path::PathBuf;

/// csvq: query CSV files with SQL via sqlite3
#[derive(Parser)]
#[command(name = "csvq")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sqlite3 script that loads the files as tables
    Init {
        #[command(flatten)]
        input: InputArgs,

        /// Leave sqlite3 in column mode for interactive use and print a table overview
        #[arg(short, long)]
        interactive: bool,

        /// Write the script to a file instead of stdout (use with `sqlite3 -init FILE`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a sqlite3 script that loads the files and runs a query
    Query {
        /// SQL to run against the loaded tables
        #[arg(short, long)]
        query: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the tables and column types inferred for the files
    Schema {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Input files and inference options shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// One or more .csv files
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Don't create unique indexes on id columns
    #[arg(long)]
    pub no_index: bool,

    /// Fail on files without data rows instead of typing their columns as text
    #[arg(long)]
    pub strict: bool,

    /// Field delimiter: a single ASCII character, or `\t` for tab
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}

impl InputArgs {
    /// Assembly configuration for these options.
    pub fn config(&self) -> AssemblerConfig {
        let missing_sample = if self.strict {
            MissingSamplePolicy::Fail
        } else {
            MissingSamplePolicy::AllText
        };

        AssemblerConfig::default()
            .with_reader(ReaderConfig {
                delimiter: self.delimiter,
                missing_sample,
            })
            .with_indexes(!self.no_index)
    }
}
