//! The HTTP transport collaborator.
//!
//! [`Request`] is plain data built by the API client; [`Client`] executes
//! it and returns a [`Response`] exposing the status code and the body.
//! Everything below the request/response surface (connection pooling,
//! TLS, keep-alive) lives in the inner `hyper` client.

use http::{Method, StatusCode};
use hyper::{body, client::HttpConnector, Body};
use hyper_tls::HttpsConnector;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::DecodeError;

/// Error returned by the transport before a response was received.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    #[from]
    error: hyper::Error,
}

/// An HTTP client performing one GET round trip per [`send`] call.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// [`send`]: Client::send
#[derive(Clone, Debug)]
pub struct Client {
    inner: hyper::Client<HttpsConnector<HttpConnector>>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        let resp = self.inner.request(request.into()).await?;

        Ok(Response { inner: resp })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self {
            inner: hyper::Client::builder().build(HttpsConnector::new()),
        }
    }
}

/// A GET request described as plain data.
#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    pub fn new(uri: String) -> Self {
        Self {
            inner: Request {
                uri,
                headers: Vec::new(),
            },
        }
    }

    /// Appends `uri` to the request target.
    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    /// Adds a header to the request.
    pub fn header<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        self.inner.headers.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

impl From<RequestBuilder> for Request {
    fn from(req: RequestBuilder) -> Self {
        req.inner
    }
}

/// A response as returned by the transport: a status code plus an
/// unconsumed body.
#[derive(Debug)]
pub struct Response {
    inner: hyper::Response<Body>,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Consumes the response and decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if reading the body fails and
    /// [`DecodeError`] if the body does not match `T`.
    ///
    /// [`DecodeError`]: crate::DecodeError
    pub async fn json<T>(self) -> crate::Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = body::to_bytes(self.inner.into_body())
            .await
            .map_err(Error::from)?;

        let value = serde_json::from_slice(&bytes).map_err(DecodeError::from)?;

        Ok(value)
    }
}

impl From<Request> for hyper::Request<Body> {
    fn from(request: Request) -> Self {
        let mut builder = hyper::Request::builder()
            .uri(request.uri)
            .method(Method::GET);

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        builder.body(Body::empty()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::RequestBuilder;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new("https://api.example.com".to_owned())
            .uri("/shards/steam/players")
            .header("Accept", "application/vnd.api+json")
            .build();

        assert_eq!(req.uri(), "https://api.example.com/shards/steam/players");
        assert_eq!(
            req.headers(),
            [("Accept", "application/vnd.api+json".to_owned())]
        );
    }
}
