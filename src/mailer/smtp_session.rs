use crate::{config::SmtpConfig, mailer::TransportError};
use lettre::{
    address::Envelope,
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{SmtpConnection, TlsParameters},
        extension::ClientId,
        response::Response,
    },
};

/// Name the client introduces itself with if `hello_name` isn't configured.
const DEFAULT_HELLO_NAME: &str = "localhost";

/// Opens SMTP sessions.
pub trait SmtpConnector {
    type Session: SmtpSession;

    /// Opens a new session to the configured SMTP server.
    fn connect(&self, config: &SmtpConfig) -> Result<Self::Session, TransportError>;
}

/// An open SMTP session. Every method returns the server response as text.
pub trait SmtpSession {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<String, TransportError>;
    fn transmit(&mut self, envelope: &Envelope, payload: &[u8]) -> Result<String, TransportError>;
    fn quit(&mut self) -> Result<String, TransportError>;
}

/// Connector that opens SMTP sessions encrypted from the connection start (implicit TLS).
#[derive(Debug, Clone, Copy, Default)]
pub struct TlsSmtpConnector;
impl SmtpConnector for TlsSmtpConnector {
    type Session = TlsSmtpSession;

    fn connect(&self, config: &SmtpConfig) -> Result<Self::Session, TransportError> {
        let to_connect_error = |err: lettre::transport::smtp::Error| TransportError::Connect {
            address: config.address(),
            source: err.into(),
        };

        let tls_parameters = TlsParameters::new(config.host.clone()).map_err(to_connect_error)?;
        let hello_name = ClientId::Domain(
            config
                .hello_name
                .clone()
                .unwrap_or_else(|| DEFAULT_HELLO_NAME.to_string()),
        );

        let connection = SmtpConnection::connect(
            (config.host.as_str(), config.port),
            config.timeout,
            &hello_name,
            Some(&tls_parameters),
            None,
        )
        .map_err(to_connect_error)?;

        Ok(TlsSmtpSession { connection })
    }
}

/// SMTP session backed by the `lettre` SMTP client connection.
pub struct TlsSmtpSession {
    connection: SmtpConnection,
}

impl SmtpSession for TlsSmtpSession {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<String, TransportError> {
        self.connection
            .auth(
                &[Mechanism::Plain, Mechanism::Login],
                &Credentials::new(username.to_string(), password.to_string()),
            )
            .map(|response| format_response(&response))
            .map_err(|err| TransportError::Authenticate(err.into()))
    }

    fn transmit(&mut self, envelope: &Envelope, payload: &[u8]) -> Result<String, TransportError> {
        self.connection
            .send(envelope, payload)
            .map(|response| format_response(&response))
            .map_err(|err| TransportError::Transmit(err.into()))
    }

    fn quit(&mut self) -> Result<String, TransportError> {
        self.connection
            .quit()
            .map(|response| format_response(&response))
            .map_err(|err| TransportError::Quit(err.into()))
    }
}

fn format_response(response: &Response) -> String {
    format!(
        "{} {}",
        response.code(),
        response.message().collect::<Vec<_>>().join(" ")
    )
}
