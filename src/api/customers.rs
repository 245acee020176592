//! Accounts-receivable customers service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{Customer, CustomerCreateRequest, CustomerId, CustomerUpdateRequest};
use crate::Result;

static LIST_CUSTOMERS: OperationDescriptor =
    OperationDescriptor::get("list_customers", "/customers");
static GET_CUSTOMER: OperationDescriptor =
    OperationDescriptor::get("get_customer", "/customer/{id}");
static CREATE_CUSTOMER: OperationDescriptor =
    OperationDescriptor::post("create_customer", "/customers");
static UPDATE_CUSTOMER: OperationDescriptor =
    OperationDescriptor::put("update_customer", "/customer/{id}");
static DELETE_CUSTOMER: OperationDescriptor =
    OperationDescriptor::delete("delete_customer", "/customer/{id}");

/// Service for accounts-receivable customer operations.
pub struct CustomersService {
    inner: Arc<ClientInner>,
}

impl CustomersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all customers.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        #[derive(Deserialize)]
        struct Response {
            customers: Vec<Customer>,
        }
        let response: Response = self.inner.get(&LIST_CUSTOMERS, &[]).await?;
        Ok(response.customers)
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: &CustomerId) -> Result<Customer> {
        self.inner.get(&GET_CUSTOMER, &[("id", id.as_str())]).await
    }

    /// Create a customer.
    pub async fn create(&self, request: &CustomerCreateRequest) -> Result<Customer> {
        self.inner.post(&CREATE_CUSTOMER, &[], request).await
    }

    /// Update a customer; absent fields are left unchanged.
    pub async fn update(
        &self,
        id: &CustomerId,
        request: &CustomerUpdateRequest,
    ) -> Result<Customer> {
        self.inner
            .put(&UPDATE_CUSTOMER, &[("id", id.as_str())], request)
            .await
    }

    /// Delete a customer.
    pub async fn delete(&self, id: &CustomerId) -> Result<()> {
        self.inner
            .delete(&DELETE_CUSTOMER, &[("id", id.as_str())])
            .await
    }
}
