use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the log excerpt that is sent along with the alert.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// Log file to take the excerpt from.
    pub source_log: PathBuf,
    /// Directory the excerpt is written to before it's attached. Created if it doesn't exist.
    pub output_dir: PathBuf,
    /// Subject of the alert email.
    pub subject: String,
    /// File name of the excerpt, also used as the attachment file name.
    pub attachment_name: String,
    /// Number of trailing lines of the source log to include in the excerpt.
    pub tail_lines: usize,
}

impl AlertConfig {
    /// Path of the excerpt file inside the output directory.
    pub fn excerpt_path(&self) -> PathBuf {
        self.output_dir.join(&self.attachment_name)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            source_log: PathBuf::from("/mnt/blockchain/debug.log"),
            output_dir: PathBuf::from("/tmp/notifyme"),
            subject: "bitcoind alert notification".to_string(),
            attachment_name: "bitcoin_debug.log".to_string(),
            tail_lines: 100,
        }
    }
}
