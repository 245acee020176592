//! Safe requests service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{SafeRequest, SafeRequestId};
use crate::Result;

static LIST_SAFE_REQUESTS: OperationDescriptor =
    OperationDescriptor::get("list_safe_requests", "/safe-requests");
static GET_SAFE_REQUEST: OperationDescriptor =
    OperationDescriptor::get("get_safe_request", "/safe-request/{id}");

/// Service for payment requests held in the safe.
pub struct SafesService {
    inner: Arc<ClientInner>,
}

impl SafesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the payment requests currently in the safe.
    pub async fn list(&self) -> Result<Vec<SafeRequest>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Response {
            safe_requests: Vec<SafeRequest>,
        }
        let response: Response = self.inner.get(&LIST_SAFE_REQUESTS, &[]).await?;
        Ok(response.safe_requests)
    }

    /// Get a single safe request by id.
    pub async fn get(&self, id: &SafeRequestId) -> Result<SafeRequest> {
        self.inner
            .get(&GET_SAFE_REQUEST, &[("id", id.as_str())])
            .await
    }
}
