//! Treasury account models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::primitives::TreasuryAccountId;

/// A treasury (money-market) account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryAccount {
    /// Treasury account identifier.
    pub id: TreasuryAccountId,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub balance: Decimal,
    /// Current annualized yield, as a fraction (0.05 = 5%).
    pub apy: Option<Decimal>,
    /// Account status, e.g. `open`.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// A movement on a treasury account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryTransaction {
    /// Transaction identifier.
    pub id: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Movement kind, e.g. `deposit`, `withdrawal`, or `dividend`.
    pub kind: Option<String>,
    /// Processing status.
    pub status: Option<String>,
    /// When the movement happened.
    pub created_at: DateTime<Utc>,
}
