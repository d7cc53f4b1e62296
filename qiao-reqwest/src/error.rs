//! Transport error types.

use thiserror::Error;

/// Errors produced by [`ReqwestTransport`](crate::ReqwestTransport).
///
/// Underlying client failures (connectivity, timeout, TLS, protocol) are
/// passed through unchanged via [`TransportError::Http`]; everything else is
/// a local conversion failure raised before any network I/O.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The base URL and the request's path/query could not be assembled
    /// into a valid URL.
    #[error(
        "invalid request URL from request path: {}, query: {} relative to base URL: {}",
        .path,
        .query.as_deref().unwrap_or("<none>"),
        .base_url
    )]
    InvalidRequestUrl {
        path: String,
        query: Option<String>,
        base_url: String,
    },

    /// A non-standard method token that is not a valid HTTP method.
    #[error("invalid HTTP method token: {0:?}")]
    InvalidMethod(String),

    /// A header name or value the client's typed header map rejects.
    #[error("invalid header field: {name:?}")]
    InvalidHeader { name: String },

    /// A failure surfaced by the underlying HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_error_names_the_offending_parts() {
        let error = TransportError::InvalidRequestUrl {
            path: "/hello/Maria".to_string(),
            query: Some("greeting=Howdy".to_string()),
            base_url: "htt p://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/hello/Maria"));
        assert!(message.contains("greeting=Howdy"));
        assert!(message.contains("htt p://example.com"));

        let error = TransportError::InvalidRequestUrl {
            path: "/hello".to_string(),
            query: None,
            base_url: "x".to_string(),
        };
        assert!(error.to_string().contains("<none>"));
    }
}
