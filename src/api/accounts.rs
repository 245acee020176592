//! Accounts service for bank-account operations.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Deserialize;

use crate::client::paginated::{
    derive_cursor, Page, PageResponse, PaginatedStream, PaginatedStreamBuilder,
};
use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{Account, AccountCard, AccountId, Statement};
use crate::Result;

static LIST_ACCOUNTS: OperationDescriptor = OperationDescriptor::get("list_accounts", "/accounts");
static GET_ACCOUNT: OperationDescriptor = OperationDescriptor::get("get_account", "/account/{id}");
static LIST_STATEMENTS: OperationDescriptor =
    OperationDescriptor::get("list_account_statements", "/account/{id}/statements");
static LIST_CARDS: OperationDescriptor =
    OperationDescriptor::get("list_account_cards", "/account/{id}/cards");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountsPage {
    accounts: Vec<Account>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl PageResponse for AccountsPage {
    type Item = Account;

    fn into_page(self, page_size: i64) -> Page<Account> {
        let next_cursor =
            derive_cursor(self.next_cursor, &self.accounts, page_size, |a| {
                a.id.to_string()
            });
        Page {
            items: self.accounts,
            next_cursor,
        }
    }
}

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: mercury_bank::MercuryClient) -> mercury_bank::Result<()> {
/// let accounts = client.accounts().list(None).await?;
/// for account in accounts {
///     println!("{}: {}", account.name, account.available_balance);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all accounts in the organization, draining every page.
    pub async fn list(&self, page_size: Option<i64>) -> Result<Vec<Account>> {
        self.list_stream(page_size).try_collect().await
    }

    /// Stream accounts lazily, one page at a time.
    pub fn list_stream(&self, page_size: Option<i64>) -> PaginatedStream<Account> {
        PaginatedStreamBuilder::<AccountsPage>::new(self.inner.clone(), &LIST_ACCOUNTS)
            .page_size(page_size.or(Some(self.inner.config.default_page_size)))
            .build()
    }

    /// Get a single account by id.
    pub async fn get(&self, id: &AccountId) -> Result<Account> {
        self.inner.get(&GET_ACCOUNT, &[("id", id.as_str())]).await
    }

    /// List the statements available for an account.
    pub async fn statements(&self, id: &AccountId) -> Result<Vec<Statement>> {
        #[derive(Deserialize)]
        struct Response {
            statements: Vec<Statement>,
        }
        let response: Response = self
            .inner
            .get(&LIST_STATEMENTS, &[("id", id.as_str())])
            .await?;
        Ok(response.statements)
    }

    /// List the cards issued against an account.
    pub async fn cards(&self, id: &AccountId) -> Result<Vec<AccountCard>> {
        #[derive(Deserialize)]
        struct Response {
            cards: Vec<AccountCard>,
        }
        let response: Response = self.inner.get(&LIST_CARDS, &[("id", id.as_str())]).await?;
        Ok(response.cards)
    }
}
