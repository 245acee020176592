//! Accounts-receivable customer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::CustomerId;

/// An accounts-receivable customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Billing email.
    pub email: Option<String>,
    /// Billing address.
    pub address: Option<Address>,
    /// Customer status, e.g. `active`.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address, first line.
    pub address1: String,
    /// Street address, second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// State or region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
}

/// Payload for creating a customer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateRequest {
    /// Display name.
    pub name: String,
    /// Billing email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Payload for updating a customer; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New billing email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}
