mod alert_config;
mod logging_config;
mod raw_config;
mod smtp_config;

pub use self::{
    alert_config::AlertConfig, logging_config::LoggingConfig, raw_config::RawConfig,
    smtp_config::SmtpConfig,
};

/// Main notifier config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the notifier binary.
    pub version: String,
    /// Configuration for the log sink.
    pub logging: LoggingConfig,
    /// Configuration for the SMTP functionality.
    pub smtp: Option<SmtpConfig>,
    /// List of the alert recipients.
    pub recipients: Vec<String>,
    /// Configuration of the log excerpt that is sent along with the alert.
    pub alert: AlertConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        // If recipients aren't configured, alerts are sent to the SMTP account itself.
        let recipients = raw_config.recipients.unwrap_or_else(|| {
            raw_config
                .smtp
                .as_ref()
                .map(|smtp| vec![smtp.username.clone()])
                .unwrap_or_default()
        });

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            logging: raw_config.logging,
            smtp: raw_config.smtp,
            recipients,
            alert: raw_config.alert,
        }
    }
}
