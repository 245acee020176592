//! # mercury-bank
//!
//! A typed Rust client for the Mercury banking API.
//!
//! This crate provides access to Mercury's organization banking surface:
//! accounts, transactions, statements, treasury accounts, invoicing,
//! customers, safe requests, and outgoing payments.
//!
//! ## Features
//!
//! - **Typed endpoint facades**: one service per resource, strongly-typed
//!   requests and responses
//! - **Cursor pagination**: lazy `Stream`-based walks over list endpoints,
//!   with stall detection against misbehaving upstreams
//! - **Credential rotation**: replace the API token at runtime; in-flight
//!   requests keep the snapshot they were built with
//! - **Cooperative cancellation**: scope any set of calls to a
//!   `CancellationToken`
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mercury_bank::MercuryClient;
//!
//! #[tokio::main]
//! async fn main() -> mercury_bank::Result<()> {
//!     let client = MercuryClient::new(std::env::var("MERCURY_API_TOKEN").unwrap())?;
//!
//!     // List accounts
//!     let accounts = client.accounts().list(None).await?;
//!     println!("Found {} accounts", accounts.len());
//!
//!     // Walk one account's transactions lazily
//!     use futures_util::TryStreamExt;
//!     use mercury_bank::api::TransactionFilter;
//!     if let Some(account) = accounts.first() {
//!         let filter = TransactionFilter {
//!             account_id: Some(account.id.clone()),
//!             ..Default::default()
//!         };
//!         let mut transactions = client.transactions().list_stream(Some(filter), None);
//!         while let Some(txn) = transactions.try_next().await? {
//!             println!("{}: {}", txn.id, txn.amount);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! ```rust,no_run
//! use mercury_bank::MercuryClient;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> mercury_bank::Result<()> {
//!     let client = MercuryClient::new("token")?;
//!     let cancel = CancellationToken::new();
//!     let scoped = client.scoped(cancel.clone());
//!
//!     // Calls made through `scoped` stop when the token is cancelled.
//!     tokio::spawn(async move {
//!         tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!         cancel.cancel();
//!     });
//!
//!     let accounts = scoped.accounts().list(None).await?;
//!     println!("{} accounts", accounts.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{
    ClientConfig, Credential, MercuryClient, Page, PageResponse, PaginatedStream,
    ProvideCredential, StaticCredential,
};
pub use error::{Error, Result, TransportKind};
pub use models::{
    AccountId, ApprovalRequestId, CategoryId, CustomerId, EventId, InvoiceId, RecipientId,
    SafeRequestId, TransactionId, TreasuryAccountId, UserId,
};
