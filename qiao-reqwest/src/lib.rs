//! qiao-reqwest
//!
//! A client transport that performs HTTP operations through a shared
//! [`reqwest::Client`].
//!
//! Create the underlying client once, hand it to a [`Configuration`], and
//! plug the resulting [`ReqwestTransport`] into a generated API client:
//!
//! ```rust,ignore
//! let client = reqwest::Client::new();
//! let transport = ReqwestTransport::new(Configuration::new(client));
//!
//! let (response, body) = transport
//!     .send(request, None, "https://api.example.com/v1", "checkHealth")
//!     .await?;
//! ```
//!
//! The transport owns no connections: the `reqwest::Client` handle stays
//! owned by the caller (cloning one only bumps a reference count), and
//! dropping the transport never tears the client down. Connection pooling,
//! TLS, and transport-level timeouts all belong to the client; the only
//! knob here is the per-request timeout on [`Configuration`].
#![deny(unsafe_code)]

mod config;
mod convert;
mod error;
mod sender;
mod transport;

pub use config::Configuration;
pub use error::TransportError;
pub use transport::ReqwestTransport;

// Contract types, re-exported so callers don't need a direct qiao-spec
// dependency for the common path.
pub use qiao_spec::{Body, BoxError, ClientTransport, HeaderField, Method, Request, Response};
