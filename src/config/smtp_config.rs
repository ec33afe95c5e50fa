use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

/// Configuration for the SMTP functionality.
#[serde_as]
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    /// Hostname of the SMTP server.
    pub host: String,
    /// Port of the SMTP server, the connection is encrypted from the start (implicit TLS).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username to use to authenticate to the SMTP server, also used as the sender address.
    pub username: String,
    /// Password to use to authenticate to the SMTP server.
    pub password: String,
    /// Optional timeout for every SMTP command. Network library default is used if not set.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
    /// Optional name to introduce the client with in `EHLO`, defaults to `localhost`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hello_name: Option<String>,
}

impl SmtpConfig {
    /// Socket address of the SMTP server.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Debug for SmtpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("timeout", &self.timeout)
            .field("hello_name", &self.hello_name)
            .finish()
    }
}

/// Default port for SMTP over implicit TLS.
const fn default_port() -> u16 {
    465
}
