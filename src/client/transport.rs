//! The transport seam: one HTTP attempt per call.
//!
//! [`Transport`] executes a prepared [`RequestContext`] exactly once and
//! reports the raw outcome. It never retries and never inspects status
//! codes: any received response, 200 through 599, is a successful
//! transport outcome handed to the decoder. Only network-level failures
//! (DNS, TLS, connect, timeout) become [`Error::Transport`].

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{Error, Result};

/// Everything needed to execute one HTTP call.
///
/// Created fresh per call by the request builder and discarded after
/// decoding; no state is shared between concurrent requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Operation name, carried into every error produced downstream.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Fully resolved URL including query string.
    pub url: Url,
    /// Headers, including the injected credential snapshot.
    pub headers: HeaderMap,
    /// Serialized JSON body, when the operation declares one.
    pub body: Option<Vec<u8>>,
    /// Cooperative cancellation signal for this call.
    pub cancel: CancellationToken,
}

/// Raw HTTP response: status, headers, and the full body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Convenience constructor for test doubles and fixtures.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Executes a single HTTP request.
///
/// Implemented by [`HttpTransport`] for real traffic and by in-memory
/// stubs in tests, so decoding and pagination logic can be exercised
/// without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request once, honoring `context.cancel`.
    ///
    /// Returns [`Error::Cancelled`] without sending when the token is
    /// already cancelled, and abandons the in-flight call when it fires
    /// mid-request.
    async fn execute(&self, context: &RequestContext) -> Result<RawResponse>;
}

/// Production transport backed by a pooled [`reqwest::Client`].
///
/// Connection pooling, TLS, and HTTP/2 negotiation are delegated to
/// `reqwest`; this type only maps outcomes onto the client's error
/// taxonomy.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given timeout and user agent.
    pub fn new(timeout: std::time::Duration, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::transport("transport_init", e))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, context: &RequestContext) -> Result<RawResponse> {
        if context.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let mut request = self
            .http
            .request(context.method.clone(), context.url.clone())
            .headers(context.headers.clone());
        if let Some(body) = &context.body {
            request = request.body(body.clone());
        }

        tracing::debug!(
            operation = context.operation,
            method = %context.method,
            url = %context.url,
            "dispatching request"
        );

        let response = tokio::select! {
            biased;
            _ = context.cancel.cancelled() => return Err(Error::Cancelled),
            response = request.send() => {
                response.map_err(|e| Error::transport(context.operation, e))?
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = tokio::select! {
            biased;
            _ = context.cancel.cancelled() => return Err(Error::Cancelled),
            body = response.bytes() => {
                body.map_err(|e| Error::transport(context.operation, e))?
            }
        };

        tracing::debug!(
            operation = context.operation,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
