//! Credential types and the provider seam used by the request builder.
//!
//! Credentials are resolved fresh for every request so callers can rotate
//! tokens at runtime. A request captures the credential snapshot at build
//! time; rotation never changes headers of a call already in flight.

use std::sync::RwLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// An API credential and its header-construction scheme.
#[derive(Clone)]
pub enum Credential {
    /// Bearer token, sent as `Authorization: Bearer <token>`.
    Bearer(SecretString),
    /// Basic auth pair, sent as `Authorization: Basic <base64>`.
    Basic {
        /// Account username or API key id.
        username: String,
        /// Password or API key secret.
        password: SecretString,
    },
}

impl Credential {
    /// Create a bearer credential from a token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credential::Bearer(SecretString::from(token.into()))
    }

    /// Create a basic-auth credential from a username/password pair.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::Basic {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Build the `Authorization` header value for this credential.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let raw = match self {
            Credential::Bearer(token) => format!("Bearer {}", token.expose_secret()),
            Credential::Basic { username, password } => {
                let pair = format!("{}:{}", username, password.expose_secret());
                format!("Basic {}", BASE64.encode(pair))
            }
        };
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| Error::InvalidRequest("credential contains invalid header characters".into()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Credential::Bearer([REDACTED])"),
            Credential::Basic { username, .. } => f
                .debug_struct("Credential::Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Source of the credential used for each request.
///
/// Implementations must be cheap to query: `resolve` runs once per request,
/// never cached across calls, so rotation takes effect on the next call.
pub trait ProvideCredential: Send + Sync {
    /// Resolve the current credential, or `None` when unauthenticated.
    fn resolve(&self) -> Option<Credential>;
}

/// A rotatable in-memory credential holder.
///
/// This is the default provider constructed by
/// [`MercuryClient::new`](crate::MercuryClient::new). Replacing the
/// credential affects subsequent requests only.
pub struct StaticCredential {
    current: RwLock<Option<Credential>>,
}

impl StaticCredential {
    /// Create a provider holding the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            current: RwLock::new(Some(credential)),
        }
    }

    /// Create a provider with no credential.
    ///
    /// Operations that require authentication will fail with
    /// `MissingCredential` before any network I/O.
    pub fn absent() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Replace the held credential.
    ///
    /// The write is a plain value swap, so a previously poisoned lock is
    /// recovered rather than propagated as a panic.
    pub fn rotate(&self, credential: Credential) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(credential);
    }

    /// Drop the held credential.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl ProvideCredential for StaticCredential {
    fn resolve(&self) -> Option<Credential> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
