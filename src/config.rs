use crate::consts;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the simulation
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snaketrail").join("config.toml"))
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

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of ticks per second
    pub(crate) frame_rate: NonZeroU32,

    /// Whether to discard position history that can no longer be read
    pub(crate) bounded_history: bool,

    /// Seed for placing the food; `None` means seed from the OS
    pub(crate) seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            frame_rate: NonZeroU32::new(consts::DEFAULT_FRAME_RATE)
                .expect("DEFAULT_FRAME_RATE should be nonzero"),
            bounded_history: true,
            seed: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    frame_rate: u32,
    bounded_history: bool,
    seed: Option<u64>,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            frame_rate: consts::DEFAULT_FRAME_RATE,
            bounded_history: true,
            seed: None,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidFrameRate;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidFrameRate> {
        let frame_rate = NonZeroU32::new(value.frame_rate)
            .filter(|fr| fr.get() <= consts::MAX_FRAME_RATE)
            .ok_or(InvalidFrameRate(value.frame_rate))?;
        Ok(GameConfig {
            frame_rate,
            bounded_history: value.bounded_history,
            seed: value.seed,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("frame-rate must be between 1 and {max}, got {0}", max = consts::MAX_FRAME_RATE)]
pub(crate) struct InvalidFrameRate(u32);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLoggingConfig")]
pub(crate) struct LoggingConfig {
    /// File to write log messages to; nothing is logged if this is unset
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level that is logged
    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLoggingConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLoggingConfig {
    fn default() -> RawLoggingConfig {
        RawLoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLoggingConfig> for LoggingConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLoggingConfig) -> Result<LoggingConfig, std::io::Error> {
        Ok(LoggingConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
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
