//! The request-sending seam.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// Performs the actual HTTP call for the transport.
///
/// The transport depends on this single-method capability instead of
/// calling [`reqwest::Client`] directly, so tests can substitute a sender
/// that returns canned responses without touching the network.
#[async_trait]
pub(crate) trait RequestSender: Send + Sync {
    async fn send(
        &self,
        request: reqwest::Request,
        client: &reqwest::Client,
        timeout: Duration,
    ) -> Result<reqwest::Response, TransportError>;
}

/// The production sender: applies the timeout and delegates to the client.
pub(crate) struct HttpRequestSender;

#[async_trait]
impl RequestSender for HttpRequestSender {
    async fn send(
        &self,
        mut request: reqwest::Request,
        client: &reqwest::Client,
        timeout: Duration,
    ) -> Result<reqwest::Response, TransportError> {
        *request.timeout_mut() = Some(timeout);
        Ok(client.execute(request).await?)
    }
}
