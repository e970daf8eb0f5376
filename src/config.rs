use crate::error::{GitLogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIN: &str = "git";
pub const DEFAULT_PATH: &str = ".";

/// Where to find git and which repository to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git executable, looked up on `PATH` unless absolute
    pub bin: String,
    /// Repository directory, relative to the current directory unless absolute
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin: DEFAULT_BIN.to_string(),
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl Config {
    pub fn new(bin: Option<String>, path: Option<PathBuf>) -> Self {
        Self {
            bin: bin.unwrap_or_default(),
            path: path.unwrap_or_default(),
        }
        .normalized()
    }

    /// Replaces empty values with the defaults
    pub fn normalized(mut self) -> Self {
        if self.bin.trim().is_empty() {
            self.bin = DEFAULT_BIN.to_string();
        }
        if self.path.as_os_str().is_empty() {
            self.path = PathBuf::from(DEFAULT_PATH);
        }
        self
    }

    /// Location of the user config file, `<config dir>/gitlog/config.toml`
    pub fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gitlog").join("config.toml"))
    }

    /// Loads the user config file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::config_file() {
            Some(file) if file.is_file() => Self::from_file(&file),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let contents = fs::read_to_string(file)?;
        log::debug!("Loading config from {}", file.display());
        Self::from_toml(&contents)
            .map_err(|e| GitLogError::ConfigError(format!("{}: {}", file.display(), e)))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| GitLogError::ConfigError(e.to_string()))?;
        Ok(config.normalized())
    }
}
