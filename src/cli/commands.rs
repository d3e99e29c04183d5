//! CLI subcommand definitions
//!
//! Running without a subcommand starts the interactive session.

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate SQL for an English question
    Ask {
        /// The question, e.g. "How many students are in the database?"
        question: String,
        /// Run the generated SQL and show the result
        #[arg(short = 'x', long)]
        execute: bool,
    },
    /// Run a SQL statement through the read-only guard
    Exec {
        /// SQL statement to run
        sql: String,
    },
    /// List the sample questions
    Samples,
    /// Show the about page
    About,
    /// Create the placement database
    InitDb {
        /// Replace an existing database file
        #[arg(long)]
        force: bool,
        /// Create the tables without demo rows
        #[arg(long)]
        empty: bool,
    },
}
