//! The Mercury client and its shared request pipeline.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::api::{
    AccountsService, CategoriesService, CustomersService, EventsService, InvoicesService,
    OrganizationService, SafesService, SendMoneyService, TransactionsService, TreasuryService,
    UsersService,
};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::credentials::{Credential, ProvideCredential, StaticCredential};
use super::decode::{decode, decode_empty};
use super::descriptor::{build_request, OperationDescriptor};
use super::transport::{HttpTransport, RawResponse, Transport};

type SharedProvider = Arc<RwLock<Arc<dyn ProvideCredential>>>;

/// The main client for the Mercury API.
///
/// Cheap to clone; all clones share the transport and credential. The
/// client is safe for concurrent use: each call builds its own request
/// context and no request-scoped state is shared.
///
/// # Example
///
/// ```no_run
/// use mercury_bank::MercuryClient;
///
/// # async fn example() -> mercury_bank::Result<()> {
/// let client = MercuryClient::new(std::env::var("MERCURY_API_TOKEN").unwrap())?;
///
/// let accounts = client.accounts().list(None).await?;
/// for account in accounts {
///     println!("{}: {} {}", account.name, account.current_balance, account.kind);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MercuryClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: SharedProvider,
    pub(crate) config: ClientConfig,
    pub(crate) cancel: CancellationToken,
}

impl MercuryClient {
    /// Create a client authenticated with a bearer API token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_token, ClientConfig::default())
    }

    /// Create a client with a bearer API token and custom configuration.
    pub fn with_config(api_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let provider = Arc::new(StaticCredential::new(Credential::bearer(api_token)));
        Self::with_provider(provider, config)
    }

    /// Create a client with a custom credential provider.
    pub fn with_provider(
        provider: Arc<dyn ProvideCredential>,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.timeout, &config.user_agent)?);
        Ok(Self::with_transport(transport, provider, config))
    }

    /// Create a client over an explicit transport.
    ///
    /// This is the seam used to substitute an in-memory transport in
    /// tests; production callers normally go through [`MercuryClient::new`].
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        provider: Arc<dyn ProvideCredential>,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                credentials: Arc::new(RwLock::new(provider)),
                config,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Replace the credential used by subsequent requests.
    ///
    /// Requests already in flight keep the credential snapshot captured
    /// when they were built.
    pub fn rotate_credential(&self, credential: Credential) {
        // The critical section is a pointer swap; a writer that panicked
        // mid-swap left a usable value behind, so recover from poisoning.
        *self
            .inner
            .credentials
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Arc::new(StaticCredential::new(credential));
    }

    /// A handle whose calls observe the given cancellation token.
    ///
    /// Transport, credentials, and configuration are shared with `self`;
    /// only the cancellation scope differs. Cancelling the token aborts
    /// pending and in-flight calls made through the returned handle.
    pub fn scoped(&self, cancel: CancellationToken) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: self.inner.transport.clone(),
                credentials: self.inner.credentials.clone(),
                config: self.inner.config.clone(),
                cancel,
            }),
        }
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the organization service.
    pub fn organization(&self) -> OrganizationService {
        OrganizationService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the events service.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Get the treasury service.
    pub fn treasury(&self) -> TreasuryService {
        TreasuryService::new(self.inner.clone())
    }

    /// Get the SAFE requests service.
    pub fn safes(&self) -> SafesService {
        SafesService::new(self.inner.clone())
    }

    /// Get the accounts-receivable customers service.
    pub fn customers(&self) -> CustomersService {
        CustomersService::new(self.inner.clone())
    }

    /// Get the accounts-receivable invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the send-money service.
    pub fn send_money(&self) -> SendMoneyService {
        SendMoneyService::new(self.inner.clone())
    }
}

impl std::fmt::Debug for MercuryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MercuryClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ClientInner {
    /// Snapshot the current credential for one request.
    fn credential_snapshot(&self) -> Option<Credential> {
        self.credentials
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .resolve()
    }

    /// Build and execute one request, without decoding.
    async fn call<Q, B>(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let credential = self.credential_snapshot();
        let context = build_request(
            descriptor,
            &self.config.base_url,
            path_params,
            query,
            body,
            credential.as_ref(),
            self.cancel.clone(),
        )?;
        self.transport.execute(&context).await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .call::<(), ()>(descriptor, path_params, None, None)
            .await?;
        decode(descriptor, &response)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .call::<Q, ()>(descriptor, path_params, Some(query), None)
            .await?;
        decode(descriptor, &response)
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .call::<(), B>(descriptor, path_params, None, Some(body))
            .await?;
        decode(descriptor, &response)
    }

    /// Make a POST request without a body or payload.
    pub(crate) async fn post_no_content(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
    ) -> Result<()> {
        let response = self
            .call::<(), ()>(descriptor, path_params, None, None)
            .await?;
        decode_empty(descriptor, &response)
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
        body: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .call::<(), B>(descriptor, path_params, None, Some(body))
            .await?;
        decode(descriptor, &response)
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(
        &self,
        descriptor: &'static OperationDescriptor,
        path_params: &[(&str, &str)],
    ) -> Result<()> {
        let response = self
            .call::<(), ()>(descriptor, path_params, None, None)
            .await?;
        decode_empty(descriptor, &response)
    }
}
