//! Transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::TransactionId;

/// A transaction on a depository account.
///
/// Amounts are signed from the account's perspective: negative for money
/// leaving the account, positive for money arriving.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier.
    pub id: TransactionId,
    /// Signed amount.
    pub amount: Decimal,
    /// Processing status.
    pub status: TransactionStatus,
    /// Transaction kind, e.g. `externalTransfer` or `cardTransaction`.
    pub kind: Option<String>,
    /// Counterparty identifier, when known.
    pub counterparty_id: Option<String>,
    /// Counterparty display name.
    pub counterparty_name: Option<String>,
    /// Counterparty nickname assigned in the dashboard.
    pub counterparty_nickname: Option<String>,
    /// Description as it appears on the bank statement.
    pub bank_description: Option<String>,
    /// Note attached in the dashboard.
    pub note: Option<String>,
    /// Memo visible to the counterparty.
    pub external_memo: Option<String>,
    /// Link to the transaction in the Mercury dashboard.
    pub dashboard_link: Option<String>,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// When the transaction posted, if it has.
    pub posted_at: Option<DateTime<Utc>>,
    /// Estimated delivery time for outgoing transfers.
    pub estimated_delivery_date: Option<DateTime<Utc>>,
    /// When the transaction failed, if it did.
    pub failed_at: Option<DateTime<Utc>>,
    /// Reason for failure, if any.
    pub reason_for_failure: Option<String>,
}

/// Processing status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Created but not yet sent.
    Pending,
    /// Sent to the receiving bank.
    Sent,
    /// Cancelled before sending.
    Cancelled,
    /// Failed to process.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_deserializes_wire_format() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": "t1",
            "amount": -100.50,
            "status": "sent",
            "kind": "externalTransfer",
            "counterpartyId": "cp-9",
            "counterpartyName": "Cloud Hosting LLC",
            "bankDescription": "ACH PMT CLOUD HOSTING",
            "createdAt": "2024-05-02T09:30:00Z",
            "postedAt": "2024-05-03T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(txn.id.as_str(), "t1");
        assert_eq!(txn.amount, "-100.50".parse().unwrap());
        assert_eq!(txn.status, TransactionStatus::Sent);
        assert!(txn.failed_at.is_none());
    }
}
