use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    ServerStatus(reqwest::StatusCode),

    #[error("Unknown processing mode: {0}")]
    UnknownMode(String),

    #[error("Failed to save result: {0}")]
    Save(String),

    #[error("Invalid event script: {0}")]
    InvalidScript(String),
}

impl ClientError {
    /// Short machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::ReadFile { .. } => "READ_FILE",
            ClientError::InvalidRequest(_) => "INVALID_REQUEST",
            ClientError::Transport(_) => "TRANSPORT",
            ClientError::ServerStatus(_) => "SERVER_STATUS",
            ClientError::UnknownMode(_) => "UNKNOWN_MODE",
            ClientError::Save(_) => "SAVE",
            ClientError::InvalidScript(_) => "INVALID_SCRIPT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_status_message() {
        let err = ClientError::ServerStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Server responded with status 500 Internal Server Error"
        );
        assert_eq!(err.code(), "SERVER_STATUS");
    }

    #[test]
    fn test_read_file_keeps_source() {
        let err = ClientError::ReadFile {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("Failed to read \"missing.png\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
