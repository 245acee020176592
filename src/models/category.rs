//! Transaction category models.

use serde::Deserialize;

use super::primitives::CategoryId;

/// A transaction category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-safe slug.
    pub slug: Option<String>,
    /// Parent category, for nested categories.
    pub parent_id: Option<CategoryId>,
}
