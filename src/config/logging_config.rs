use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the log sink.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Path to the file all log records are appended to.
    pub path: PathBuf,
    /// Name of the logger, attached to every log record.
    pub logger_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("notifyme.log"),
            logger_name: "notifyme".to_string(),
        }
    }
}
