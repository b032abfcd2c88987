use crate::cli::Args;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the processing service, without a trailing mode segment
    pub server_url: String,
    /// Upper bound on a single processing request
    pub timeout: Duration,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            server_url: args.server.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

impl Config {
    pub fn for_server(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: Duration::from_secs(120),
        }
    }
}
