//! Typed data models for the Mercury API.
//!
//! All wire names are camelCase on the JSON side; money amounts are
//! [`rust_decimal::Decimal`] and timestamps are [`chrono::DateTime<Utc>`].

pub mod account;
pub mod category;
pub mod customer;
pub mod event;
pub mod invoice;
pub mod organization;
pub mod primitives;
pub mod safe;
pub mod send_money;
pub mod transaction;
pub mod treasury;

pub use account::{Account, AccountCard, AccountStatus, Statement};
pub use category::Category;
pub use customer::{Address, Customer, CustomerCreateRequest, CustomerUpdateRequest};
pub use event::ApiEvent;
pub use invoice::{
    Invoice, InvoiceCreateRequest, InvoiceStatus, InvoiceUpdateRequest, LineItem,
};
pub use organization::{OrganizationInfo, User};
pub use primitives::{
    AccountId, ApprovalRequestId, CategoryId, CustomerId, EventId, InvoiceId, RecipientId,
    SafeRequestId, SortOrder, TransactionId, TreasuryAccountId, UserId,
};
pub use safe::SafeRequest;
pub use send_money::{SendMoneyApproval, SendMoneyRequest};
pub use transaction::{Transaction, TransactionStatus};
pub use treasury::{TreasuryAccount, TreasuryTransaction};
