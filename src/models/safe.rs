//! SAFE fundraising request models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::primitives::SafeRequestId;

/// A SAFE (Simple Agreement for Future Equity) fundraising request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeRequest {
    /// SAFE request identifier.
    pub id: SafeRequestId,
    /// Name of the investor.
    pub investor_name: Option<String>,
    /// Investment amount.
    pub amount: Decimal,
    /// Request status, e.g. `pending` or `signed`.
    pub status: String,
    /// Valuation cap agreed in the SAFE, if any.
    pub valuation_cap: Option<Decimal>,
    /// Discount rate agreed in the SAFE, if any.
    pub discount_percentage: Option<Decimal>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}
