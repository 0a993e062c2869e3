use super::checker::FailureMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// name of the optional configuration file in the reference directory
pub const CONFIG_FILE_NAME: &str = "versync.toml";

/// how the run's report is rendered on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// diagnostics on stderr only
    #[default]
    Human,
    /// diagnostics on stderr plus a json report on stdout
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// main configuration for versync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersyncConfig {
    /// check every location instead of stopping at the first failure
    #[serde(default)]
    pub keep_going: bool,

    /// output format when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,
}

impl VersyncConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// load `versync.toml` from the reference directory
    ///
    /// returns the default config if the file does not exist; a file that
    /// exists but cannot be parsed is an error
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        match Self::find_config_file(root) {
            Some(config_path) => Self::load_from_file(config_path),
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    pub fn failure_mode(&self) -> FailureMode {
        if self.keep_going {
            FailureMode::KeepGoing
        } else {
            FailureMode::FailFast
        }
    }
}
