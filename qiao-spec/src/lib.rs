//! qiao-spec
//!
//! Transport contract and data types for qiao.
//!
//! This crate intentionally contains only *contract-level* types: the
//! transport-agnostic request/response pair a generated API client codes
//! against, the body abstraction, and the [`ClientTransport`] trait.
//! Concrete HTTP backends live in other crates (e.g. `qiao-reqwest`).
#![deny(unsafe_code)]

pub mod body;
pub mod http;
pub mod transport;

pub use body::{Body, BoxError};
pub use http::{HeaderField, Method, Request, Response};
pub use transport::ClientTransport;
