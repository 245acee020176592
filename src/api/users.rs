//! Users service.

use std::sync::Arc;

use serde::Deserialize;

use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{User, UserId};
use crate::Result;

static LIST_USERS: OperationDescriptor = OperationDescriptor::get("list_users", "/users");
static GET_USER: OperationDescriptor = OperationDescriptor::get("get_user", "/user/{id}");

/// Service for organization-user operations.
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the users in the organization.
    pub async fn list(&self) -> Result<Vec<User>> {
        #[derive(Deserialize)]
        struct Response {
            users: Vec<User>,
        }
        let response: Response = self.inner.get(&LIST_USERS, &[]).await?;
        Ok(response.users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: &UserId) -> Result<User> {
        self.inner.get(&GET_USER, &[("id", id.as_str())]).await
    }
}
