use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::prompt::Accuracy;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) api_base: Option<String>,
    #[serde(default)]
    pub(crate) database: Option<PathBuf>,
    #[serde(default)]
    pub(crate) accuracy: Option<Accuracy>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) normalize_salary: Option<bool>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File the values came from
    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
    /// Files that exist but failed to parse
    #[serde(skip)]
    pub(crate) problems: Vec<String>,
}

impl Config {
    /// First readable and parseable config file, or defaults.
    ///
    /// Runs before logging is set up, so outcomes are recorded on the value
    /// and reported later by [`Config::log_outcome`].
    pub(crate) fn load() -> Self {
        let mut problems = Vec::new();
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(mut config) => {
                        config.loaded_from = Some(path);
                        config.problems = problems;
                        return config;
                    }
                    Err(e) => problems.push(format!("{}: {}", path.display(), e.message())),
                }
            }
        }

        Self {
            problems,
            ..Self::default()
        }
    }

    pub(crate) fn log_outcome(&self) {
        for problem in &self.problems {
            tracing::warn!(problem = %problem, "failed to parse config");
        }
        if let Some(path) = &self.loaded_from {
            tracing::debug!(path = %path.display(), "loaded config");
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/llmsql/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("llmsql").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("llmsql").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.llmsql.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".llmsql.toml"));
        }

        paths
    }
}
