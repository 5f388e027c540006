use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A loaded value failed `validate()`
    #[error("Invalid [{section}] config: {message} {location}")]
    Validation {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown log level '{value}' (expected off, error, warn, info, debug or trace)")]
    UnknownLogLevel { value: String },

    /// The `server.json` discovery file could not be written or understood
    #[error("Port file {path}: {message} {location}")]
    PortFile {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine current working directory: {source}")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn validation<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Validation {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn port_file<S: Into<String>>(path: PathBuf, message: S) -> Self {
        ConfigError::PortFile {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
