//! Port discovery file.
//!
//! The server writes `<config_dir>/server.json` after binding so the `cm`
//! client can find it without a `--server` flag. A file left behind by a
//! crashed server is detected by PID liveness and removed on read.

use crate::{Config, ConfigError, ConfigErrorResult, port_file::is_process_running};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortFileInfo {
    /// Process ID of the server that wrote this file
    pub pid: u32,
    pub port: u16,
    pub host: String,
    /// RFC 3339 timestamp when the server started
    pub started_at: String,
    pub version: String,
}

impl PortFileInfo {
    /// Base URL a client should use to reach this server.
    ///
    /// A wildcard bind address is not connectable, so it maps to loopback.
    pub fn base_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }

    /// Write the port file in `config_dir`.
    ///
    /// Refuses to overwrite the file of a server that is still running.
    pub fn write_in(config_dir: &Path, port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        if let Some(existing) = Self::read_live_in(config_dir)? {
            return Err(ConfigError::port_file(
                config_dir.join(PORT_FILENAME),
                format!(
                    "another cm-server is already running on port {} (PID {}). \
                     Stop it first or use a different config directory.",
                    existing.port, existing.pid
                ),
            ));
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let path = config_dir.join(PORT_FILENAME);
        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::port_file(path.clone(), format!("cannot serialize: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the port file without checking liveness.
    ///
    /// `Ok(None)` when the file does not exist.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = config_dir.join(PORT_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let info = serde_json::from_str(&content)
            .map_err(|e| ConfigError::port_file(path.clone(), format!("invalid contents: {e}")))?;

        Ok(Some(info))
    }

    /// Read the port file from the default config directory, dropping it
    /// if its server is gone. This is what the client uses.
    pub fn read_live() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_live_in(&Config::config_dir()?)
    }

    pub fn read_live_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let Some(info) = Self::read_in(config_dir)? else {
            return Ok(None);
        };

        if is_process_running(info.pid) {
            return Ok(Some(info));
        }

        log::debug!(
            "Removing stale port file (pid {} no longer running)",
            info.pid
        );
        Self::remove_in(config_dir).ok();
        Ok(None)
    }

    /// Remove the port file on graceful shutdown. Missing file is not an error.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(PORT_FILENAME);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// `<config_dir>/server.json`, for error messages.
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(PORT_FILENAME))
    }
}
