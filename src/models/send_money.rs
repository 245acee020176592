//! Outgoing payment models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{ApprovalRequestId, RecipientId};

/// Payload for initiating an outgoing payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyRequest {
    /// Saved recipient to pay.
    pub recipient_id: RecipientId,
    /// Amount to send.
    pub amount: Decimal,
    /// Payment method, e.g. `ach`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Note shown to the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Client-supplied key for safe resubmission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// A payment awaiting approval before it is sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyApproval {
    /// Approval request identifier.
    pub id: ApprovalRequestId,
    /// Approval status, e.g. `pending`, `approved` or `rejected`.
    pub status: String,
    /// Amount of the pending payment.
    pub amount: Option<Decimal>,
    /// Recipient of the pending payment.
    pub recipient_id: Option<RecipientId>,
    /// Free-form memo on the request.
    pub memo: Option<String>,
    /// When the approval request was created.
    pub created_at: Option<DateTime<Utc>>,
}
