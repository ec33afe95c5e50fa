use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error returned by the underlying SMTP client.
pub type SmtpClientError = Box<dyn StdError + Send + Sync>;

/// Errors that occur while the message is delivered to the SMTP server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Cannot connect to SMTP server {address}.")]
    Connect {
        address: String,
        #[source]
        source: SmtpClientError,
    },
    #[error("Cannot authenticate to SMTP server.")]
    Authenticate(#[source] SmtpClientError),
    #[error("Cannot transmit message to SMTP server.")]
    Transmit(#[source] SmtpClientError),
    #[error("Cannot close SMTP session.")]
    Quit(#[source] SmtpClientError),
    #[error("Cannot build message envelope: {0}")]
    Envelope(String),
    #[error("None of the recipients can be routed.")]
    NoRoutableRecipients,
    #[error("SMTP session is already closed.")]
    SessionClosed,
}
