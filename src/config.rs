use crate::options::Options;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay options for every session
    #[serde(default)]
    pub(crate) options: Options,

    /// Settings about sound cues
    #[serde(default)]
    pub(crate) feedback: FeedbackConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFeedbackConfig")]
pub(crate) struct FeedbackConfig {
    /// Whether to ring the terminal bell when the sound files cannot be played
    pub(crate) bell: bool,

    pub(crate) eat_sound: Option<PathBuf>,

    pub(crate) lose_sound: Option<PathBuf>,
}

impl Default for FeedbackConfig {
    fn default() -> FeedbackConfig {
        FeedbackConfig {
            bell: true,
            eat_sound: None,
            lose_sound: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawFeedbackConfig {
    bell: bool,
    eat_sound: Option<String>,
    lose_sound: Option<String>,
}

impl Default for RawFeedbackConfig {
    fn default() -> RawFeedbackConfig {
        RawFeedbackConfig {
            bell: true,
            eat_sound: None,
            lose_sound: None,
        }
    }
}

impl TryFrom<RawFeedbackConfig> for FeedbackConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFeedbackConfig) -> Result<FeedbackConfig, std::io::Error> {
        Ok(FeedbackConfig {
            bell: value.bell,
            eat_sound: value.eat_sound.map(expanduser::expanduser).transpose()?,
            lose_sound: value.lose_sound.map(expanduser::expanduser).transpose()?,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to append log messages to; no logging is done when unset
    pub(crate) file: Option<PathBuf>,

    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawLogConfig {
    file: Option<String>,
    level: Option<String>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = LogConfigError;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, LogConfigError> {
        let level = match value.level {
            Some(s) => s
                .parse::<LevelFilter>()
                .map_err(|_| LogConfigError::Level(s))?,
            None => LogConfig::default().level,
        };
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub(crate) enum LogConfigError {
    #[error("unknown log level {0:?}")]
    Level(String),
    #[error("failed to expand log file path")]
    Path(#[from] std::io::Error),
}
