//! Identifier newtypes for type-safe API interactions.
//!
//! Mercury identifies every resource by an opaque string id. Wrapping each
//! kind in its own newtype prevents, say, a transaction id from being
//! passed where an account id belongs. Syntactic validation happens in the
//! request builder when an id is substituted into a path.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type! {
    /// Identifier of a depository account.
    AccountId
}

id_type! {
    /// Identifier of a transaction.
    TransactionId
}

id_type! {
    /// Identifier of a treasury account.
    TreasuryAccountId
}

id_type! {
    /// Identifier of an accounts-receivable invoice.
    InvoiceId
}

id_type! {
    /// Identifier of an accounts-receivable customer.
    CustomerId
}

id_type! {
    /// Identifier of an organization user.
    UserId
}

id_type! {
    /// Identifier of an audit event.
    EventId
}

id_type! {
    /// Identifier of a SAFE funding request.
    SafeRequestId
}

id_type! {
    /// Identifier of a payment recipient.
    RecipientId
}

id_type! {
    /// Identifier of a send-money approval request.
    ApprovalRequestId
}

id_type! {
    /// Identifier of a transaction category.
    CategoryId
}

/// Sort order for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}
