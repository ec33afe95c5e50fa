use crate::emails::{EmailMessage, MessageError};
use lettre::{
    Message,
    message::{
        Attachment, Body, MultiPart, SinglePart,
        header::{ContentTransferEncoding, ContentType},
    },
};
use std::{fs, path::Path};

/// Content type of all attachments, regardless of the actual file type.
const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// Serializes email messages into a transmittable `multipart/mixed` payload.
pub struct MessageBuilder;
impl MessageBuilder {
    /// Builds RFC 5322 representation of the message: a plain text part with the message text
    /// followed by one base64 encoded part per attachment. Attachment files are read entirely
    /// into memory.
    pub fn build(message: &EmailMessage) -> Result<String, MessageError> {
        let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(message.text.clone()));
        for attachment in &message.attachments {
            multipart = multipart.singlepart(Self::build_attachment(attachment)?);
        }

        let mut message_builder = Message::builder()
            .from(message.from.clone())
            .subject(message.subject.as_str());
        for recipient in &message.to {
            message_builder = message_builder.to(recipient.clone());
        }

        let message_builder = if let Some(timestamp) = message.timestamp {
            message_builder.date(timestamp)
        } else {
            message_builder
        };

        let email = message_builder
            .multipart(multipart)
            .map_err(|err| MessageError::Build(err.to_string()))?;

        Ok(String::from_utf8_lossy(&email.formatted()).into_owned())
    }

    fn build_attachment(path: &Path) -> Result<SinglePart, MessageError> {
        let content = fs::read(path).map_err(|source| MessageError::Attachment {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|file_name| file_name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let body = Body::new_with_encoding(content, ContentTransferEncoding::Base64).map_err(|_| {
            MessageError::Build(format!("Cannot base64 encode attachment {path:?}."))
        })?;
        let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)
            .map_err(|err| MessageError::Build(err.to_string()))?;

        Ok(Attachment::new(file_name).body(body, content_type))
    }
}
