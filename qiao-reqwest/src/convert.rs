//! Conversions between the contract types and reqwest's own.

use futures_util::TryStreamExt;
use qiao_spec::{Body, BoxError, HeaderField, Method, Request, Response};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

use crate::error::TransportError;

/// Builds the concrete request: URL assembly, method and header mapping,
/// body attach. No network I/O happens here.
///
/// The request path is appended to the base URL's path by plain
/// concatenation, and the percent-encoded query is set verbatim.
pub(crate) fn convert_request(
    request: Request,
    body: Option<Body>,
    base_url: &str,
) -> Result<reqwest::Request, TransportError> {
    let invalid_url = |request: &Request| TransportError::InvalidRequestUrl {
        path: request.path.clone(),
        query: request.query.clone(),
        base_url: base_url.to_string(),
    };

    let base = Url::parse(base_url).map_err(|_| invalid_url(&request))?;
    if base.cannot_be_a_base() {
        return Err(invalid_url(&request));
    }
    let mut url = base.clone();
    // A bare authority parses with path "/"; appending to it verbatim would
    // double the slash.
    let base_path = match base.path() {
        "/" => "",
        path => path,
    };
    url.set_path(&format!("{}{}", base_path, request.path));
    url.set_query(request.query.as_deref());

    let mut concrete = reqwest::Request::new(convert_method(&request.method)?, url);
    for field in &request.header_fields {
        let name = HeaderName::from_bytes(field.name.to_ascii_lowercase().as_bytes())
            .map_err(|_| TransportError::InvalidHeader {
                name: field.name.clone(),
            })?;
        let value =
            HeaderValue::from_str(&field.value).map_err(|_| TransportError::InvalidHeader {
                name: field.name.clone(),
            })?;
        concrete.headers_mut().append(name, value);
    }
    if let Some(body) = body {
        // A buffered body keeps its known length; only genuinely streamed
        // bodies go out chunked.
        *concrete.body_mut() = Some(if let Some(bytes) = body.as_bytes().cloned() {
            reqwest::Body::from(bytes)
        } else {
            reqwest::Body::wrap_stream(body.into_stream())
        });
    }
    Ok(concrete)
}

/// Maps the received response back into the contract types.
///
/// Headers keep their order and duplicates; non-UTF-8 header bytes are
/// carried through lossily. The body stays lazy: nothing is buffered until
/// the caller collects it.
pub(crate) fn convert_response(
    method: &Method,
    response: reqwest::Response,
) -> (Response, Option<Body>) {
    let status = response.status();
    let header_fields = response
        .headers()
        .iter()
        .map(|(name, value)| {
            HeaderField::new(name.as_str(), String::from_utf8_lossy(value.as_bytes()))
        })
        .collect();
    let body = if body_expected(method, status) {
        Some(Body::from_stream(
            response.bytes_stream().map_err(|e| Box::new(e) as BoxError),
        ))
    } else {
        None
    };
    (
        Response {
            status: status.as_u16(),
            header_fields,
        },
        body,
    )
}

fn convert_method(method: &Method) -> Result<reqwest::Method, TransportError> {
    Ok(match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Head => reqwest::Method::HEAD,
        Method::Patch => reqwest::Method::PATCH,
        Method::Trace => reqwest::Method::TRACE,
        Method::Other(token) => reqwest::Method::from_bytes(token.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(token.clone()))?,
    })
}

/// Whether a response body is semantically expected: none after a HEAD
/// request, none for 204 No Content or 304 Not Modified.
fn body_expected(method: &Method, status: StatusCode) -> bool {
    if matches!(method, Method::Head) {
        return false;
    }
    !matches!(status.as_u16(), 204 | 304)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_response(status: u16, body: &'static str) -> reqwest::Response {
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        reqwest::Response::from(response)
    }

    #[test]
    fn assembles_url_from_base_path_and_query() {
        let request = Request::new(Method::Post, "/hello world/Maria")
            .with_query("greeting=Howdy")
            .with_header("content-type", "application/json");
        let concrete =
            convert_request(request, Some(Body::from("[{}]")), "http://example.com/api/v1")
                .unwrap();

        assert_eq!(
            concrete.url().as_str(),
            "http://example.com/api/v1/hello%20world/Maria?greeting=Howdy"
        );
        assert_eq!(concrete.method(), &reqwest::Method::POST);
        assert_eq!(
            concrete.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert!(concrete.body().is_some());
    }

    #[test]
    fn keeps_already_encoded_path_segments() {
        let request = Request::new(Method::Get, "/hello%20world/Maria");
        let concrete = convert_request(request, None, "http://example.com/api/v1").unwrap();
        assert_eq!(
            concrete.url().as_str(),
            "http://example.com/api/v1/hello%20world/Maria"
        );
    }

    #[test]
    fn omits_query_and_body_when_absent() {
        let request = Request::new(Method::Get, "/things");
        let concrete = convert_request(request, None, "http://example.com").unwrap();
        assert_eq!(concrete.url().as_str(), "http://example.com/things");
        assert!(concrete.url().query().is_none());
        assert!(concrete.body().is_none());
    }

    #[test]
    fn lowercases_header_names_and_keeps_duplicates_in_order() {
        let request = Request::new(Method::Get, "/")
            .with_header("X-Tag", "one")
            .with_header("x-tag", "two");
        let concrete = convert_request(request, None, "http://example.com").unwrap();

        let values: Vec<_> = concrete
            .headers()
            .get_all("x-tag")
            .iter()
            .map(|value| value.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["one", "two"]);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let request = Request::new(Method::Get, "/hello").with_query("a=b");
        let error = convert_request(request, None, "htt p://example.com").unwrap_err();
        match error {
            TransportError::InvalidRequestUrl {
                path,
                query,
                base_url,
            } => {
                assert_eq!(path, "/hello");
                assert_eq!(query.as_deref(), Some("a=b"));
                assert_eq!(base_url, "htt p://example.com");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_base_url_that_cannot_carry_a_path() {
        let request = Request::new(Method::Get, "/hello");
        let error = convert_request(request, None, "mailto:maria@example.com").unwrap_err();
        assert!(matches!(error, TransportError::InvalidRequestUrl { .. }));
    }

    #[test]
    fn maps_standard_methods_to_their_constants() {
        let cases = [
            (Method::Get, reqwest::Method::GET),
            (Method::Put, reqwest::Method::PUT),
            (Method::Post, reqwest::Method::POST),
            (Method::Delete, reqwest::Method::DELETE),
            (Method::Options, reqwest::Method::OPTIONS),
            (Method::Head, reqwest::Method::HEAD),
            (Method::Patch, reqwest::Method::PATCH),
            (Method::Trace, reqwest::Method::TRACE),
        ];
        for (abstract_method, concrete_method) in cases {
            assert_eq!(convert_method(&abstract_method).unwrap(), concrete_method);
        }
    }

    #[test]
    fn carries_extension_method_tokens_verbatim() {
        let method = convert_method(&Method::Other("QUERY".to_string())).unwrap();
        assert_eq!(method.as_str(), "QUERY");

        let error = convert_method(&Method::Other("BAD TOKEN".to_string())).unwrap_err();
        assert!(matches!(error, TransportError::InvalidMethod(_)));
    }

    #[tokio::test]
    async fn converts_response_status_headers_and_body() {
        let (response, body) = convert_response(&Method::Get, canned_response(200, "[{}]"));

        assert_eq!(response.status, 200);
        assert_eq!(
            response.header_fields,
            vec![HeaderField::new("content-type", "application/json")]
        );
        let bytes = body.expect("body expected").collect().await.unwrap();
        assert_eq!(bytes.as_ref(), b"[{}]");
    }

    #[test]
    fn head_responses_carry_no_body() {
        let (response, body) = convert_response(&Method::Head, canned_response(200, ""));
        assert_eq!(response.status, 200);
        assert!(body.is_none());
    }

    #[test]
    fn no_content_and_not_modified_carry_no_body() {
        let (_, body) = convert_response(&Method::Get, canned_response(204, ""));
        assert!(body.is_none());
        let (_, body) = convert_response(&Method::Get, canned_response(304, ""));
        assert!(body.is_none());
    }
}
