//! Audit event models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::primitives::EventId;

/// An audit event recorded against the organization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    /// Event identifier.
    pub id: EventId,
    /// Event kind, e.g. `transaction.created`.
    pub kind: String,
    /// Type of the resource the event concerns.
    pub resource_type: Option<String>,
    /// Identifier of the resource the event concerns.
    pub resource_id: Option<String>,
    /// Event payload, shape varies by kind.
    pub data: Option<serde_json::Value>,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
}
