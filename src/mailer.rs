mod scoped_session;
mod send_report;
mod smtp_session;
mod transport_error;

pub use self::{
    scoped_session::ScopedSession,
    send_report::{AddressWarning, DeliveryOutcome, SendReport},
    smtp_session::{SmtpConnector, SmtpSession, TlsSmtpConnector},
    transport_error::TransportError,
};
use crate::{
    config::SmtpConfig,
    emails::{EmailMessage, MessageBuilder, MessageError, is_valid_address},
};
use anyhow::Context;
use lettre::{address::Envelope, message::Mailbox};
use std::{path::PathBuf, time::SystemTime};
use tracing::{error, info, warn};

/// Width of the separator that marks the end of every send attempt in the log.
const SEPARATOR_WIDTH: usize = 80;

/// Sends emails through the configured SMTP server. Every `send` opens its own session.
pub struct Mailer<C: SmtpConnector> {
    config: SmtpConfig,
    sender: Mailbox,
    connector: C,
}

impl<C: SmtpConnector> Mailer<C> {
    pub fn with_connector(config: SmtpConfig, connector: C) -> anyhow::Result<Self> {
        let sender = config
            .username
            .parse()
            .with_context(|| format!("Cannot parse FROM address: {}", config.username))?;

        Ok(Self {
            config,
            sender,
            connector,
        })
    }

    /// Sends a message with all its attachments to the recipients. Delivery failures are logged
    /// and reported, but not returned as errors: only a message that cannot be composed (e.g.
    /// attachment cannot be read) fails the call, and it does so before the SMTP server is
    /// contacted. Recipients that cannot be parsed as mailboxes are excluded from both the envelope
    /// and the `To` header, and reported as `Unroutable`.
    pub fn send<R: AsRef<str>>(
        &self,
        recipients: &[R],
        subject: Option<&str>,
        text: Option<&str>,
        attachments: &[PathBuf],
    ) -> Result<SendReport, MessageError> {
        if recipients.is_empty() {
            return Ok(SendReport::skipped());
        }

        let (routable_recipients, warnings) = Self::validate_recipients(recipients);
        for warning in &warnings {
            match warning {
                AddressWarning::Suspicious(_) => warn!("{warning}"),
                AddressWarning::Unroutable(_) => error!("{warning}"),
            }
        }

        let outcome = if routable_recipients.is_empty() {
            Ok(Self::failed(TransportError::NoRoutableRecipients))
        } else {
            let message = EmailMessage::new(
                self.sender.clone(),
                routable_recipients,
                subject,
                text,
                attachments.to_vec(),
            )
            .with_timestamp(SystemTime::now());
            MessageBuilder::build(&message).map(|payload| self.deliver(&message, &payload))
        };

        info!("{}", "=".repeat(SEPARATOR_WIDTH));

        Ok(SendReport {
            warnings,
            outcome: outcome?,
        })
    }

    /// Checks every recipient address and returns the ones that can be delivered to along with
    /// the warnings about the rest.
    pub fn validate_recipients<R: AsRef<str>>(
        recipients: &[R],
    ) -> (Vec<Mailbox>, Vec<AddressWarning>) {
        let mut mailboxes = Vec::with_capacity(recipients.len());
        let mut warnings = vec![];
        for recipient in recipients {
            let recipient = recipient.as_ref();
            match recipient.parse::<Mailbox>() {
                Ok(mailbox) => {
                    if !is_valid_address(recipient) {
                        warnings.push(AddressWarning::Suspicious(recipient.to_string()));
                    }
                    mailboxes.push(mailbox);
                }
                Err(_) => warnings.push(AddressWarning::Unroutable(recipient.to_string())),
            }
        }

        (mailboxes, warnings)
    }

    fn deliver(&self, message: &EmailMessage, payload: &str) -> DeliveryOutcome {
        let envelope = match Envelope::new(
            Some(message.from.email.clone()),
            message.to.iter().map(|mailbox| mailbox.email.clone()).collect(),
        ) {
            Ok(envelope) => envelope,
            Err(err) => return Self::failed(TransportError::Envelope(err.to_string())),
        };

        let mut session = match self.connector.connect(&self.config) {
            Ok(session) => ScopedSession::new(session),
            Err(err) => return Self::failed(err),
        };

        let outcome = match session
            .authenticate(&self.config.username, &self.config.password)
            .and_then(|_| session.transmit(&envelope, payload.as_bytes()))
        {
            Ok(response) => {
                info!("{message}");
                info!(
                    "Email sent.\t{} --> {}",
                    self.sender,
                    message
                        .to
                        .iter()
                        .map(|mailbox| mailbox.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                DeliveryOutcome::Delivered { response }
            }
            Err(err) => Self::failed(err),
        };

        session.close();

        outcome
    }

    fn failed(err: TransportError) -> DeliveryOutcome {
        let reason = err.to_string();
        error!("Failed to send email!: {:?}", anyhow::Error::from(err));
        DeliveryOutcome::Failed { reason }
    }
}
