use std::fmt::{Display, Formatter};

/// Non-blocking problem detected with one of the recipient addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressWarning {
    /// Address doesn't look like a valid email address, sending may fail.
    Suspicious(String),
    /// Address cannot be parsed at all and is excluded from the delivery.
    Unroutable(String),
}

impl Display for AddressWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspicious(address) => write!(
                f,
                "Recipient email address [{address}] seems invalid. Sending may fail."
            ),
            Self::Unroutable(address) => write!(
                f,
                "Recipient email address [{address}] cannot be parsed and will be skipped."
            ),
        }
    }
}

/// Result of the delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// There was nothing to send.
    Skipped,
    /// SMTP server accepted the message.
    Delivered { response: String },
    /// Message couldn't be delivered, the reason is logged in full.
    Failed { reason: String },
}

/// Describes a single `send` call: recipient warnings and the delivery outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub warnings: Vec<AddressWarning>,
    pub outcome: DeliveryOutcome,
}

impl SendReport {
    pub fn skipped() -> Self {
        Self {
            warnings: vec![],
            outcome: DeliveryOutcome::Skipped,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, DeliveryOutcome::Delivered { .. })
    }
}
