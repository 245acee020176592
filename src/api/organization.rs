//! Organization service.

use std::sync::Arc;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::OrganizationInfo;
use crate::Result;

static GET_ORGANIZATION: OperationDescriptor =
    OperationDescriptor::get("get_organization", "/organization");

/// Service for organization-level operations.
pub struct OrganizationService {
    inner: Arc<ClientInner>,
}

impl OrganizationService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the organization that owns the API token.
    pub async fn get(&self) -> Result<OrganizationInfo> {
        self.inner.get(&GET_ORGANIZATION, &[]).await
    }
}
