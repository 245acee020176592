//! Categories service for transaction-category lookups.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::Category;
use crate::Result;

static LIST_CATEGORIES: OperationDescriptor =
    OperationDescriptor::get("list_categories", "/categories");

/// Service for transaction-category operations.
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the categories available for classifying transactions.
    pub async fn list(&self) -> Result<Vec<Category>> {
        #[derive(Deserialize)]
        struct Response {
            categories: Vec<Category>,
        }
        let response: Response = self.inner.get(&LIST_CATEGORIES, &[]).await?;
        Ok(response.categories)
    }
}
