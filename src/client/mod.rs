//! Client runtime for the Mercury API.
//!
//! This module provides the main entry point [`MercuryClient`] together
//! with the small reusable pieces every endpoint is built from: operation
//! descriptors, the request builder, the transport seam, the response
//! decoder, and the pagination walker.
//!
//! # Example
//!
//! ```no_run
//! use mercury_bank::MercuryClient;
//!
//! # async fn example() -> mercury_bank::Result<()> {
//! let client = MercuryClient::new("secret-token")?;
//!
//! let accounts = client.accounts().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod credentials;
mod decode;
mod descriptor;
mod http;
pub mod paginated;
mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{Credential, ProvideCredential, StaticCredential};
pub use descriptor::{AuthRequirement, OperationDescriptor};
pub use http::MercuryClient;
pub use paginated::{Page, PageResponse, PaginatedStream, DEFAULT_PAGE_SIZE};
pub use transport::{HttpTransport, RawResponse, RequestContext, Transport};

pub(crate) use http::ClientInner;
