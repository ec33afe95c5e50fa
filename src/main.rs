#![deny(warnings)]

mod alert;
mod config;
mod directories;
mod emails;
mod logging;
mod mailer;

use crate::{
    config::{Config, RawConfig},
    logging::create_log_sink,
    mailer::TlsSmtpConnector,
};
use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version};
use std::process::ExitCode;
use tracing::{error, info, info_span};

fn main() -> Result<ExitCode, anyhow::Error> {
    dotenvy::dotenv().ok();

    let matches = Command::new("notifyme")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("NOTIFYME_CONFIG")
                .short('c')
                .long("config")
                .default_value("notifyme.toml")
                .help("Path to the application configuration file."),
        )
        .arg(Arg::new("MESSAGE").help("Alert message, sent as the email text."))
        .get_matches();

    let config = Config::from(RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?);

    // Log sink is only active for the duration of the run.
    let log_sink = create_log_sink(&config.logging)?;
    let outcome = tracing::dispatcher::with_default(&log_sink, || {
        let span = info_span!("notifyme", logger = %config.logging.logger_name);
        let _entered = span.enter();

        info!("Notifier v{} configuration: {config:?}.", config.version);

        alert::run(
            &config,
            matches.get_one::<String>("MESSAGE").map(String::as_str),
            TlsSmtpConnector,
        )
        .inspect_err(|err| error!("Failed to send alert: {err:?}"))
    })?;

    Ok(ExitCode::from(outcome.exit_status()))
}
