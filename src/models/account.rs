//! Depository account models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::AccountId;

/// A Mercury depository account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// User-assigned nickname, if any.
    pub nickname: Option<String>,
    /// Account kind, e.g. `checking` or `savings`.
    pub kind: String,
    /// Lifecycle status.
    pub status: AccountStatus,
    /// ABA routing number.
    pub routing_number: String,
    /// Account number.
    pub account_number: String,
    /// Balance available for spending.
    pub available_balance: Decimal,
    /// Ledger balance including pending activity.
    pub current_balance: Decimal,
    /// Legal name of the business that owns the account.
    pub legal_business_name: String,
    /// Whether the account can receive transactions.
    pub can_receive_transactions: Option<bool>,
    /// Link to the account in the Mercury dashboard.
    pub dashboard_link: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a depository account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Open and usable.
    Active,
    /// Awaiting activation.
    Pending,
    /// Closed but retained for history.
    Archived,
    /// Deleted.
    Deleted,
}

/// A card attached to an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCard {
    /// Card identifier.
    pub card_id: String,
    /// Last four digits of the card number.
    pub last_four_digits: String,
    /// Name printed on the card.
    pub name_on_card: String,
    /// Card status, e.g. `active` or `frozen`.
    pub status: String,
    /// Physical or virtual.
    pub physical_card_status: Option<String>,
    /// Network, e.g. `visa`.
    pub network: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// A monthly statement for a depository account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Statement identifier.
    pub id: String,
    /// Account the statement belongs to.
    pub account_number: Option<String>,
    /// First day covered by the statement.
    pub start_date: NaiveDate,
    /// Last day covered by the statement.
    pub end_date: NaiveDate,
    /// Balance at the end of the period.
    pub ending_balance: Option<Decimal>,
    /// Download URL for the statement PDF.
    pub download_url: Option<String>,
}
