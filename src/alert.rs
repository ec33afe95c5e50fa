mod log_excerpt;

pub use self::log_excerpt::write_log_excerpt;
use crate::{
    config::Config,
    directories::Directories,
    mailer::{Mailer, SendReport, SmtpConnector},
};
use anyhow::anyhow;
use std::fs;
use tracing::{error, info};

/// Describes how the alert run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Alert message wasn't provided, nothing was sent.
    MissingMessage,
    /// Send attempt was made, see the report for the outcome.
    Completed(SendReport),
    /// Email couldn't be composed, the log excerpt is left in place for inspection.
    Aborted { reason: String },
}

impl AlertOutcome {
    /// Process exit status for the outcome. Failed deliveries are only logged.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::MissingMessage => 1,
            Self::Completed(_) | Self::Aborted { .. } => 0,
        }
    }
}

/// Sends the alert `message` along with the tail of the configured log file to all recipients.
/// The log excerpt is removed only if the email is delivered.
pub fn run<C: SmtpConnector>(
    config: &Config,
    message: Option<&str>,
    connector: C,
) -> anyhow::Result<AlertOutcome> {
    let Some(message) = message else {
        error!("Message argument is missing!");
        return Ok(AlertOutcome::MissingMessage);
    };

    let smtp_config = config
        .smtp
        .clone()
        .ok_or_else(|| anyhow!("SMTP is not configured."))?;

    Directories::ensure_dir_exists(&config.alert.output_dir)?;

    let excerpt_path = config.alert.excerpt_path();
    write_log_excerpt(
        &config.alert.source_log,
        &excerpt_path,
        config.alert.tail_lines,
    )?;

    let mailer = Mailer::with_connector(smtp_config, connector)?;
    let report = match mailer.send(
        &config.recipients,
        Some(&config.alert.subject),
        Some(message),
        &[excerpt_path.clone()],
    ) {
        Ok(report) => report,
        Err(err) => {
            let reason = err.to_string();
            error!("Failed to send email: {:?}", anyhow::Error::from(err));
            return Ok(AlertOutcome::Aborted { reason });
        }
    };

    if report.is_delivered() {
        match fs::remove_file(&excerpt_path) {
            Ok(_) => info!("Removed log excerpt {excerpt_path:?}."),
            Err(err) => error!("Cannot remove log excerpt {excerpt_path:?}: {err:?}"),
        }
    }

    Ok(AlertOutcome::Completed(report))
}
