//! Transport-agnostic HTTP request and response types.

use std::fmt;

/// An HTTP request method.
///
/// The standard verbs are enumerated; anything else travels as
/// [`Method::Other`] carrying the raw token verbatim, so extension methods
/// pass through a transport untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
    /// A non-standard method, carrying the original token.
    Other(String),
}

impl Method {
    /// The method token as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single header name/value pair.
///
/// Header names are case-insensitive by contract. Header collections are
/// ordered and may contain duplicate names; transports must preserve both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A transport-agnostic HTTP request.
///
/// The path and query are kept separate from the server's base URL, which is
/// supplied to [`ClientTransport::send`](crate::ClientTransport::send) at
/// call time. The request body travels as a separate `send` argument rather
/// than a field.
#[derive(Debug, Clone)]
pub struct Request {
    /// Percent-encoded path, appended to the base URL's path.
    pub path: String,
    /// Percent-encoded query string, without the leading `?`.
    pub query: Option<String>,
    pub method: Method,
    pub header_fields: Vec<HeaderField>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            method,
            header_fields: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Appends a header field, keeping any existing fields with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_fields.push(HeaderField::new(name, value));
        self
    }
}

/// A transport-agnostic HTTP response.
///
/// The body, when present, is returned next to the response by
/// [`ClientTransport::send`](crate::ClientTransport::send).
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub header_fields: Vec<HeaderField>,
}

impl Response {
    /// Looks up the first header with the given name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }
}
