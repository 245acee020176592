//! Error types for the Mercury API client.
//!
//! Every public operation resolves to exactly one of: a typed value, an
//! [`Error`] variant, or [`Error::Cancelled`]. Nothing is retried or
//! recovered inside the client; retry and backoff policy belong to the
//! caller, which can pattern-match on these variants.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Mercury operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Network-level failure classification.
///
/// These describe failures where no HTTP status was received. A response
/// with any status code, including 4xx/5xx, is *not* a transport error;
/// it is decoded into [`Error::Api`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// DNS resolution, TCP connect, or TLS handshake failure.
    Connect,
    /// The request deadline elapsed before a response arrived.
    Timeout,
    /// The request could not be sent (connection reset mid-request, etc.).
    Request,
    /// The response body could not be read from the wire.
    Body,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransportKind::Connect => "connect",
            TransportKind::Timeout => "timeout",
            TransportKind::Request => "request",
            TransportKind::Body => "body",
        };
        write!(f, "{s}")
    }
}

/// The main error type for all Mercury API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The operation requires authentication but no credential was
    /// available when the request was built. No request was sent.
    #[error("{operation}: missing credential")]
    MissingCredential {
        /// Name of the operation that was about to run.
        operation: &'static str,
    },

    /// Caller-supplied arguments were rejected before any I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A network-level failure; the server never produced a status code.
    #[error("{operation}: transport error ({kind}): {message}")]
    Transport {
        /// Name of the failing operation.
        operation: &'static str,
        /// Failure classification.
        kind: TransportKind,
        /// Human-readable detail from the underlying HTTP stack.
        message: String,
    },

    /// The server responded with a status outside the operation's
    /// declared success set.
    #[error("{operation}: API error (status {status})")]
    Api {
        /// Name of the failing operation.
        operation: &'static str,
        /// HTTP status code of the response.
        status: u16,
        /// Structured error body, when the response parsed as JSON.
        body: Option<Value>,
        /// Raw body text, kept when the body was not valid JSON.
        raw: Option<String>,
    },

    /// A success-status response did not match the declared schema.
    ///
    /// This indicates the API contract drifted from the generated models
    /// and is deliberately distinct from [`Error::Api`]: it is reported,
    /// never coerced to a default value.
    #[error("{operation}: response did not match expected schema: {source}")]
    SchemaMismatch {
        /// Name of the failing operation.
        operation: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The server returned the same pagination cursor twice in a row.
    ///
    /// The walker stops instead of looping forever against a misbehaving
    /// upstream.
    #[error("{operation}: pagination cursor {cursor:?} did not advance")]
    PaginationStall {
        /// Name of the listing operation.
        operation: &'static str,
        /// The cursor value that repeated.
        cursor: String,
    },

    /// The call was cancelled before completion.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// The HTTP status of this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    ///
    /// Useful for the "treat 404 as absent" pattern when probing optional
    /// provider capabilities.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` for a 401 or 403 response, or a missing credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::MissingCredential { .. })
            || matches!(self.status(), Some(401) | Some(403))
    }

    /// Returns `true` if the failure is potentially transient.
    ///
    /// The client itself never retries; this helper exists so a policy
    /// layer above can decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport { .. } => true,
            Error::Api { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Returns `true` if the error was caused by bad caller input.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidRequest(_) => true,
            Error::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    pub(crate) fn transport(operation: &'static str, err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportKind::Body
        } else {
            TransportKind::Request
        };
        Error::Transport {
            operation,
            kind,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = Error::Api {
            operation: "get_account",
            status: 404,
            body: None,
            raw: None,
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retryable_classification() {
        let transport = Error::Transport {
            operation: "list_accounts",
            kind: TransportKind::Timeout,
            message: "deadline elapsed".into(),
        };
        assert!(transport.is_retryable());

        let rate_limited = Error::Api {
            operation: "list_accounts",
            status: 429,
            body: None,
            raw: None,
        };
        assert!(rate_limited.is_retryable());

        assert!(!Error::Cancelled.is_retryable());
        assert!(!Error::InvalidRequest("bad".into()).is_retryable());
    }

    #[test]
    fn test_auth_classification() {
        let missing = Error::MissingCredential {
            operation: "list_accounts",
        };
        assert!(missing.is_auth_error());

        let forbidden = Error::Api {
            operation: "list_safe_requests",
            status: 403,
            body: None,
            raw: None,
        };
        assert!(forbidden.is_auth_error());
        assert!(!Error::Cancelled.is_auth_error());
    }
}
