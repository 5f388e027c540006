use error_location::ErrorLocation;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;

/// Failures talking to cm-server
#[derive(Error, Debug)]
pub enum ClientError {
    /// No HTTP response at all (connection refused, timeout, bad URL)
    #[error("Cannot reach server: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// Non-2xx response, decoded from the `{"error": {...}}` envelope when present
    #[error("Server answered {status} {code}: {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 2xx response whose body is not JSON
    #[error("Unreadable response body: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            code: code.into(),
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build an `Api` error from a failed response.
    ///
    /// Bodies that are not the server's error envelope (proxies, unknown
    /// routes on other servers) fall back to `HTTP_<status>` and the raw text.
    #[track_caller]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let error = parsed.get("error");
        let text = |key: &str| {
            error
                .and_then(|e| e.get(key))
                .and_then(Value::as_str)
                .map(String::from)
        };

        let message = text("message").unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            }
        });

        ClientError::Api {
            status,
            code: text("code").unwrap_or_else(|| format!("HTTP_{}", status)),
            message,
            field: text("field"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short form for showing to a person (no source location)
    pub fn summary(&self) -> String {
        match self {
            ClientError::Transport { source, .. } => format!("request failed: {}", source),
            ClientError::Api {
                code,
                message,
                field: Some(field),
                ..
            } => format!("{}: {} ({})", code, message, field),
            ClientError::Api { code, message, .. } => format!("{}: {}", code, message),
            ClientError::Decode { source, .. } => format!("unexpected response: {}", source),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
