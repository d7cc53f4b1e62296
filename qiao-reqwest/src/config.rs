//! Transport configuration.

use std::time::Duration;

/// Configuration values for [`ReqwestTransport`](crate::ReqwestTransport).
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The client used for performing HTTP calls.
    ///
    /// Owned by the caller; the transport never constructs or shuts one
    /// down.
    pub client: reqwest::Client,
    /// The default per-request timeout.
    pub timeout: Duration,
}

impl Configuration {
    /// The timeout applied when none is configured: one minute.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a configuration around an existing client, with the default
    /// timeout.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_minute_timeout() {
        let configuration = Configuration::new(reqwest::Client::new());
        assert_eq!(configuration.timeout, Duration::from_secs(60));
    }

    #[test]
    fn timeout_is_overridable() {
        let configuration = Configuration::new(reqwest::Client::new())
            .with_timeout(Duration::from_millis(250));
        assert_eq!(configuration.timeout, Duration::from_millis(250));
    }
}
