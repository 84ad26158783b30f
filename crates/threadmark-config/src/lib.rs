use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How the CLI prints parsed segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented one-node-per-line tree.
    #[default]
    Outline,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default = "default_center_lone_formatters")]
    pub center_lone_formatters: bool,

    /// Where bare thread names are looked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads_dir: Option<PathBuf>,
}

fn default_center_lone_formatters() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            center_lone_formatters: default_center_lone_formatters(),
            threads_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the threads directory
        config.threads_dir = config
            .threads_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/threadmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves a thread argument to a file.
    ///
    /// A bare name (no directory part) that does not exist as given is
    /// looked up in `threads_dir`, with `.json` appended when it has no
    /// extension.
    pub fn thread_path(&self, name: &str) -> PathBuf {
        let given = PathBuf::from(name);
        let is_bare = given.parent().is_none_or(|p| p.as_os_str().is_empty());
        match &self.threads_dir {
            Some(dir) if is_bare && !given.exists() => {
                let mut path = dir.join(&given);
                if path.extension().is_none() {
                    path.set_extension("json");
                }
                path
            }
            _ => given,
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
