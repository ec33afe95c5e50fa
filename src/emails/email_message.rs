use lettre::message::Mailbox;
use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
    time::SystemTime,
};

/// Subject used when the caller didn't provide one.
const DEFAULT_SUBJECT: &str = "[no-subject]";
/// Body text used when the caller didn't provide one.
const DEFAULT_TEXT: &str = "[no-text]";

/// Email message to be serialized by [`MessageBuilder`](crate::emails::MessageBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: Mailbox,
    pub to: Vec<Mailbox>,
    pub subject: String,
    pub text: String,
    /// Files to attach, read only when the message is built.
    pub attachments: Vec<PathBuf>,
    pub timestamp: Option<SystemTime>,
}

impl EmailMessage {
    /// Creates a new message, empty or absent subject and text are replaced with placeholders.
    pub fn new(
        from: Mailbox,
        to: Vec<Mailbox>,
        subject: Option<&str>,
        text: Option<&str>,
        attachments: Vec<PathBuf>,
    ) -> Self {
        Self {
            from,
            to,
            subject: subject
                .filter(|subject| !subject.is_empty())
                .unwrap_or(DEFAULT_SUBJECT)
                .to_string(),
            text: text
                .filter(|text| !text.is_empty())
                .unwrap_or(DEFAULT_TEXT)
                .to_string(),
            attachments,
            timestamp: None,
        }
    }

    /// Create `EmailMessage` instance with the specified timestamp.
    pub fn with_timestamp(self, timestamp: SystemTime) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..self
        }
    }
}

impl Display for EmailMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "subject: {}; attachments: {}; no_attached: {}",
            self.subject,
            !self.attachments.is_empty(),
            self.attachments.len()
        )
    }
}
