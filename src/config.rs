// Run configuration. The tool has no flags or environment knobs, so the
// defaults below are the values every real run uses; tests build their own.

use std::path::PathBuf;
use std::time::Duration;

/// Input file read from the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Endpoint that creates one user per POST.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/users";

/// Where users are read from and where they are sent.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub endpoint: String,
    /// `None` lets a hanging server stall the run indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
        }
    }
}
