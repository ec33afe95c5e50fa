use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that occur while the message is composed, before any network resource is acquired.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Attachment file is missing or cannot be read.
    #[error("Cannot read attachment {path:?}.")]
    Attachment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// MIME structure of the message cannot be assembled.
    #[error("Cannot build email message: {0}")]
    Build(String),
}
