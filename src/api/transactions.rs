//! Transactions service for organization-wide and account-scoped queries.

use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};

use crate::client::paginated::{
    derive_cursor, Page, PageResponse, PaginatedStream, PaginatedStreamBuilder,
};
use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{AccountId, SortOrder, Transaction, TransactionId, TransactionStatus};
use crate::{Error, Result};

static LIST_TRANSACTIONS: OperationDescriptor =
    OperationDescriptor::get("list_transactions", "/transactions");
static LIST_ACCOUNT_TRANSACTIONS: OperationDescriptor =
    OperationDescriptor::get("list_account_transactions", "/account/{id}/transactions");
static GET_TRANSACTION: OperationDescriptor =
    OperationDescriptor::get("get_transaction", "/transaction/{id}");

/// Filters applied to a transaction walk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionFilter {
    /// Only transactions on this account.
    #[serde(rename = "accountId", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Only transactions on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Only transactions on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Only transactions in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Free-text search over descriptions and counterparties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl TransactionFilter {
    fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(Error::InvalidRequest(format!(
                    "invalid date range: start {start} is after end {end}"
                )));
            }
        }
        Ok(())
    }
}

/// Query for a single page of transactions, with full cursor control.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionQuery {
    /// Maximum number of transactions to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Sort order by creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Return transactions after this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after: Option<String>,
    /// Return transactions before this opaque cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_before: Option<String>,
    /// Only transactions on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Only transactions on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionsPage {
    transactions: Vec<Transaction>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl PageResponse for TransactionsPage {
    type Item = Transaction;

    fn into_page(self, page_size: i64) -> Page<Transaction> {
        let next_cursor =
            derive_cursor(self.next_cursor, &self.transactions, page_size, |t| {
                t.id.to_string()
            });
        Page {
            items: self.transactions,
            next_cursor,
        }
    }
}

/// Service for transaction-related operations.
///
/// # Example
///
/// ```no_run
/// use futures_util::TryStreamExt;
///
/// # async fn example(client: mercury_bank::MercuryClient) -> mercury_bank::Result<()> {
/// let mut stream = client.transactions().list_stream(None, None);
/// while let Some(txn) = stream.try_next().await? {
///     println!("{} {}", txn.id, txn.amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List transactions across every account, draining every page.
    ///
    /// Use [`TransactionFilter::account_id`] to narrow to one account.
    pub async fn list(&self, filter: Option<TransactionFilter>) -> Result<Vec<Transaction>> {
        self.list_stream(filter, None).try_collect().await
    }

    /// Stream transactions across every account, one page at a time.
    ///
    /// An invalid date range in `filter` surfaces as the first stream item.
    pub fn list_stream(
        &self,
        filter: Option<TransactionFilter>,
        page_size: Option<i64>,
    ) -> PaginatedStream<Transaction> {
        if let Some(Err(Error::InvalidRequest(message))) =
            filter.as_ref().map(TransactionFilter::validate)
        {
            return PaginatedStream::new(
                LIST_TRANSACTIONS.name,
                self.inner.cancel.clone(),
                move |_| {
                    let message = message.clone();
                    Box::pin(async move { Err(Error::InvalidRequest(message)) })
                },
            );
        }
        PaginatedStreamBuilder::<TransactionsPage>::new(self.inner.clone(), &LIST_TRANSACTIONS)
            .page_size(page_size.or(Some(self.inner.config.default_page_size)))
            .build_with_query(filter)
    }

    /// Fetch one page of an account's transactions with explicit cursors.
    pub async fn for_account(
        &self,
        account_id: &AccountId,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>> {
        let response: TransactionsPage = self
            .inner
            .get_with_query(
                &LIST_ACCOUNT_TRANSACTIONS,
                &[("id", account_id.as_str())],
                query,
            )
            .await?;
        Ok(response.transactions)
    }

    /// Get a single transaction by id, regardless of account.
    pub async fn get(&self, id: &TransactionId) -> Result<Transaction> {
        self.inner
            .get(&GET_TRANSACTION, &[("id", id.as_str())])
            .await
    }
}
