//! Accounts-receivable invoice models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{CustomerId, InvoiceId};

/// An accounts-receivable invoice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice identifier.
    pub id: InvoiceId,
    /// Human-facing invoice number.
    pub invoice_number: Option<String>,
    /// Customer being billed.
    pub customer_id: CustomerId,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Total amount due.
    pub total_amount: Decimal,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Free-form memo shown on the invoice.
    pub memo: Option<String>,
    /// Line items, when expanded by the endpoint.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent to the customer.
    Draft,
    /// Sent and awaiting payment.
    Unpaid,
    /// Paid in full.
    Paid,
    /// Past the due date.
    Overdue,
    /// Cancelled before payment.
    Cancelled,
}

/// One billable line on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the goods or service.
    pub description: String,
    /// Quantity billed.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreateRequest {
    /// Customer to bill.
    pub customer_id: CustomerId,
    /// Human-facing invoice number; server-assigned when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Billable lines.
    pub line_items: Vec<LineItem>,
    /// Free-form memo shown on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Payload for updating an invoice; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdateRequest {
    /// New due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Replacement line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    /// New memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_omits_absent_fields() {
        let update = InvoiceUpdateRequest {
            memo: Some("net 30".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"memo": "net 30"})
        );
    }
}
