//! Organization and user models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::primitives::UserId;

/// The organization that owns the API token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    /// Organization identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Registered legal name.
    pub legal_business_name: Option<String>,
    /// Employer identification number.
    pub ein: Option<String>,
}

/// A user in the organization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Role in the organization, e.g. `admin` or `bookkeeper`.
    pub role: Option<String>,
    /// When the user joined.
    pub created_at: Option<DateTime<Utc>>,
}
