//! Treasury service for investment accounts.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Deserialize;

use crate::client::paginated::{
    derive_cursor, CursorParam, Page, PageResponse, PaginatedStreamBuilder,
};
use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{TreasuryAccount, TreasuryAccountId, TreasuryTransaction};
use crate::Result;

static LIST_TREASURY: OperationDescriptor =
    OperationDescriptor::get("list_treasury_accounts", "/treasury");
static LIST_TREASURY_TRANSACTIONS: OperationDescriptor = OperationDescriptor::get(
    "list_treasury_transactions",
    "/treasury/{id}/transactions",
);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TreasuryTransactionsPage {
    transactions: Vec<TreasuryTransaction>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl PageResponse for TreasuryTransactionsPage {
    type Item = TreasuryTransaction;

    fn into_page(self, page_size: i64) -> Page<TreasuryTransaction> {
        let next_cursor =
            derive_cursor(self.next_cursor, &self.transactions, page_size, |t| {
                t.id.clone()
            });
        Page {
            items: self.transactions,
            next_cursor,
        }
    }
}

/// Service for treasury-account operations.
pub struct TreasuryService {
    inner: Arc<ClientInner>,
}

impl TreasuryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the organization's treasury accounts.
    pub async fn list(&self) -> Result<Vec<TreasuryAccount>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Response {
            treasury_accounts: Vec<TreasuryAccount>,
        }
        let response: Response = self.inner.get(&LIST_TREASURY, &[]).await?;
        Ok(response.treasury_accounts)
    }

    /// List a treasury account's transactions, draining every page.
    ///
    /// This endpoint names its continuation parameter `cursor` rather than
    /// `start_after`.
    pub async fn transactions(
        &self,
        id: &TreasuryAccountId,
        page_size: Option<i64>,
    ) -> Result<Vec<TreasuryTransaction>> {
        PaginatedStreamBuilder::<TreasuryTransactionsPage>::new(
            self.inner.clone(),
            &LIST_TREASURY_TRANSACTIONS,
        )
        .path_param("id", id.as_str())
        .page_size(page_size.or(Some(self.inner.config.default_page_size)))
        .cursor_param(CursorParam::Cursor)
        .build()
        .try_collect()
        .await
    }
}
