use crate::mailer::{SmtpSession, TransportError};
use lettre::address::Envelope;
use tracing::{error, info};

/// Owns an open SMTP session and closes it exactly once: either explicitly with `close` or when
/// dropped. The server's response to `QUIT` is logged.
pub struct ScopedSession<S: SmtpSession> {
    session: Option<S>,
}

impl<S: SmtpSession> ScopedSession<S> {
    pub fn new(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<String, TransportError> {
        self.session
            .as_mut()
            .ok_or(TransportError::SessionClosed)?
            .authenticate(username, password)
    }

    pub fn transmit(&mut self, envelope: &Envelope, payload: &[u8]) -> Result<String, TransportError> {
        self.session
            .as_mut()
            .ok_or(TransportError::SessionClosed)?
            .transmit(envelope, payload)
    }

    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            match session.quit() {
                Ok(response) => info!("{response}"),
                Err(err) => error!("Failed to close SMTP session: {:?}", anyhow::Error::from(err)),
            }
        }
    }
}

impl<S: SmtpSession> Drop for ScopedSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::ScopedSession;
    use crate::{
        mailer::{SmtpConnector, TransportError},
        tests::{MockSmtpConnector, MockSmtpFailure, mock_smtp_config},
    };

    #[test]
    fn closes_session_once() -> anyhow::Result<()> {
        let connector = MockSmtpConnector::new();

        let mut session = ScopedSession::new(connector.connect(&mock_smtp_config())?);
        session.authenticate("alerts@notifyme.dev", "changeme")?;
        session.close();
        session.close();
        drop(session);

        assert_eq!(connector.log.borrow().quits, 1);

        Ok(())
    }

    #[test]
    fn closes_session_on_drop() -> anyhow::Result<()> {
        let connector = MockSmtpConnector::new();

        {
            let _session = ScopedSession::new(connector.connect(&mock_smtp_config())?);
            assert_eq!(connector.log.borrow().quits, 0);
        }

        assert_eq!(connector.log.borrow().quits, 1);

        Ok(())
    }

    #[test]
    fn rejects_calls_after_close() -> anyhow::Result<()> {
        let connector = MockSmtpConnector::new();

        let mut session = ScopedSession::new(connector.connect(&mock_smtp_config())?);
        session.close();

        assert!(matches!(
            session.authenticate("alerts@notifyme.dev", "changeme"),
            Err(TransportError::SessionClosed)
        ));
        assert!(connector.log.borrow().authentications.is_empty());

        Ok(())
    }

    #[test]
    fn tolerates_quit_failures() -> anyhow::Result<()> {
        let connector = MockSmtpConnector::new_with_failure(MockSmtpFailure::Quit);

        let mut session = ScopedSession::new(connector.connect(&mock_smtp_config())?);
        session.close();
        drop(session);

        assert_eq!(connector.log.borrow().quits, 1);

        Ok(())
    }
}
