//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_API_BASE, DEFAULT_DATABASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::prompt::Accuracy;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "llmsql")]
#[command(about = "Turn English questions about placement data into SQL", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// SQLite database file [default: placement.db]
    #[arg(short, long, global = true, env = "DB_PATH", value_name = "PATH")]
    pub(crate) database: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, global = true, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Model name [default: gemini-2.0-flash]
    #[arg(long, global = true)]
    pub(crate) model: Option<String>,

    /// Base URL of the generative language API
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) api_base: Option<String>,

    /// Accuracy preset for generated SQL [default: balanced]
    #[arg(short, long, global = true, value_enum)]
    pub(crate) accuracy: Option<Accuracy>,

    /// Output as JSON
    #[arg(short, long, global = true, conflicts_with = "csv")]
    pub(crate) json: bool,

    /// Output results as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Send salary figures to the model as written instead of in LPA
    #[arg(long, global = true)]
    pub(crate) no_salary_normalization: bool,

    /// Model request timeout in seconds [default: 60]
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    #[arg(skip)]
    normalize_salary: Option<bool>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.database.is_none() {
            self.database = config.database.clone();
        }
        if self.model.is_none() {
            self.model = config.model.clone();
        }
        if self.api_base.is_none() {
            self.api_base = config.api_base.clone();
        }
        if self.accuracy.is_none() {
            self.accuracy = config.accuracy;
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }
        self.normalize_salary = config.normalize_salary;

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub(crate) fn model_name(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub(crate) fn api_base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub(crate) fn default_accuracy(&self) -> Accuracy {
        self.accuracy.unwrap_or_default()
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// `--no-salary-normalization` wins, then the config file, then on
    pub(crate) fn normalize_salary(&self) -> bool {
        !self.no_salary_normalization && self.normalize_salary.unwrap_or(true)
    }
}
