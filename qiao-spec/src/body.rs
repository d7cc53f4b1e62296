//! HTTP message bodies.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::Stream;
use futures::stream::BoxStream;

/// The error type carried by streamed bodies and by [`ClientTransport`]
/// implementations.
///
/// [`ClientTransport`]: crate::ClientTransport
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An HTTP message body: a byte sequence, possibly streamed.
///
/// A body is either fully buffered up front or backed by a fallible stream
/// of chunks. Either way it can be consumed as a `Stream` of [`Bytes`], or
/// buffered in one go with [`Body::collect`].
pub struct Body {
    inner: Inner,
}

enum Inner {
    Buffered(Option<Bytes>),
    Streaming(BoxStream<'static, Result<Bytes, BoxError>>),
}

impl Body {
    /// Creates a fully buffered body.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            inner: Inner::Buffered(Some(bytes.into())),
        }
    }

    /// Creates a body backed by a stream of chunks.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, BoxError>> + Send + 'static,
    {
        Self {
            inner: Inner::Streaming(Box::pin(stream)),
        }
    }

    /// Creates an empty body.
    pub fn empty() -> Self {
        Self::from_bytes(Bytes::new())
    }

    /// The buffered contents, when the body is not backed by a stream.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.inner {
            Inner::Buffered(slot) => slot.as_ref(),
            Inner::Streaming(_) => None,
        }
    }

    /// Consumes the body as a boxed chunk stream.
    pub fn into_stream(self) -> BoxStream<'static, Result<Bytes, BoxError>> {
        Box::pin(self)
    }

    /// Buffers the remainder of the body into a single byte sequence.
    pub async fn collect(self) -> Result<Bytes, BoxError> {
        use futures::StreamExt;

        match self.inner {
            Inner::Buffered(slot) => Ok(slot.unwrap_or_default()),
            Inner::Streaming(mut stream) => {
                let mut buffer = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buffer.extend_from_slice(&chunk?);
                }
                Ok(buffer.freeze())
            }
        }
    }
}

impl Stream for Body {
    type Item = Result<Bytes, BoxError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match &mut self.get_mut().inner {
            Inner::Buffered(slot) => {
                Poll::Ready(slot.take().filter(|bytes| !bytes.is_empty()).map(Ok))
            }
            Inner::Streaming(stream) => stream.as_mut().poll_next(cx),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::from_bytes(text)
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Self::from_bytes(text)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Buffered(slot) => f
                .debug_struct("Body")
                .field("buffered", &slot.as_ref().map_or(0, Bytes::len))
                .finish(),
            Inner::Streaming(_) => f.debug_struct("Body").field("streaming", &true).finish(),
        }
    }
}
