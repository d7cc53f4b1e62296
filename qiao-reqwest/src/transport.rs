//! The transport façade.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use qiao_spec::{Body, BoxError, ClientTransport, Request, Response};

use crate::config::Configuration;
use crate::convert::{convert_request, convert_response};
use crate::error::TransportError;
use crate::sender::{HttpRequestSender, RequestSender};

/// A client transport that performs HTTP operations using a shared
/// [`reqwest::Client`].
///
/// The transport is stateless apart from its [`Configuration`], so cloning
/// it is cheap and one value can serve concurrent calls. Each `send` builds
/// exactly one concrete request, awaits exactly one response, and performs
/// no retries.
#[derive(Clone)]
pub struct ReqwestTransport {
    configuration: Configuration,
    sender: Arc<dyn RequestSender>,
}

impl ReqwestTransport {
    /// Creates a transport that sends requests through the configured
    /// client.
    pub fn new(configuration: Configuration) -> Self {
        Self::with_sender(configuration, Arc::new(HttpRequestSender))
    }

    pub(crate) fn with_sender(
        configuration: Configuration,
        sender: Arc<dyn RequestSender>,
    ) -> Self {
        Self {
            configuration,
            sender,
        }
    }

    /// Sends one request and awaits its response.
    ///
    /// A URL composition failure, or any failure reported by the underlying
    /// client, aborts this call and propagates to the caller unchanged.
    pub async fn send(
        &self,
        request: Request,
        body: Option<Body>,
        base_url: &str,
        operation_id: &str,
    ) -> Result<(Response, Option<Body>), TransportError> {
        let method = request.method.clone();
        let concrete = convert_request(request, body, base_url)?;
        tracing::debug!(
            operation_id,
            method = %concrete.method(),
            url = %concrete.url(),
            "sending request"
        );
        let response = self
            .sender
            .send(
                concrete,
                &self.configuration.client,
                self.configuration.timeout,
            )
            .await?;
        Ok(convert_response(&method, response))
    }
}

#[async_trait]
impl ClientTransport for ReqwestTransport {
    async fn send(
        &self,
        request: Request,
        body: Option<Body>,
        base_url: &str,
        operation_id: &str,
    ) -> Result<(Response, Option<Body>), BoxError> {
        Ok(self.send(request, body, base_url, operation_id).await?)
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}
