//! The client transport contract.

use async_trait::async_trait;

use crate::body::{Body, BoxError};
use crate::http::{Request, Response};

/// The capability a generated API client needs from an HTTP transport.
///
/// A transport turns one abstract request into exactly one concrete HTTP
/// call and one abstract response. Implementations must not retry, mutate
/// the request, or interpret the response beyond the field mapping itself.
///
/// Implementations are expected to be stateless apart from shared
/// configuration, so a single transport value can serve concurrent calls.
#[async_trait]
pub trait ClientTransport: Send + Sync {
    /// Sends one HTTP request and awaits its response.
    ///
    /// `base_url` is the server's base URL; the request's path is appended
    /// to it. `operation_id` identifies the API operation being invoked and
    /// is used for diagnostics only. The returned body is present only when
    /// one is semantically expected for the request method and response
    /// status.
    async fn send(
        &self,
        request: Request,
        body: Option<Body>,
        base_url: &str,
        operation_id: &str,
    ) -> Result<(Response, Option<Body>), BoxError>;
}
