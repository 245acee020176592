//! Accounts-receivable invoices service.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Deserialize;

use crate::client::paginated::{
    derive_cursor, Page, PageResponse, PaginatedStream, PaginatedStreamBuilder,
};
use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{Invoice, InvoiceCreateRequest, InvoiceId, InvoiceUpdateRequest};
use crate::Result;

static LIST_INVOICES: OperationDescriptor = OperationDescriptor::get("list_invoices", "/invoices");
static GET_INVOICE: OperationDescriptor = OperationDescriptor::get("get_invoice", "/invoice/{id}");
static CREATE_INVOICE: OperationDescriptor =
    OperationDescriptor::post("create_invoice", "/invoices");
static UPDATE_INVOICE: OperationDescriptor =
    OperationDescriptor::put("update_invoice", "/invoice/{id}");
static CANCEL_INVOICE: OperationDescriptor =
    OperationDescriptor::post_empty("cancel_invoice", "/invoice/{id}/cancel");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoicesPage {
    invoices: Vec<Invoice>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl PageResponse for InvoicesPage {
    type Item = Invoice;

    fn into_page(self, page_size: i64) -> Page<Invoice> {
        let next_cursor =
            derive_cursor(self.next_cursor, &self.invoices, page_size, |i| {
                i.id.to_string()
            });
        Page {
            items: self.invoices,
            next_cursor,
        }
    }
}

/// Service for accounts-receivable invoice operations.
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all invoices, draining every page.
    pub async fn list(&self, page_size: Option<i64>) -> Result<Vec<Invoice>> {
        self.list_stream(page_size).try_collect().await
    }

    /// Stream invoices lazily, one page at a time.
    pub fn list_stream(&self, page_size: Option<i64>) -> PaginatedStream<Invoice> {
        PaginatedStreamBuilder::<InvoicesPage>::new(self.inner.clone(), &LIST_INVOICES)
            .page_size(page_size.or(Some(self.inner.config.default_page_size)))
            .build()
    }

    /// Get a single invoice by id.
    pub async fn get(&self, id: &InvoiceId) -> Result<Invoice> {
        self.inner.get(&GET_INVOICE, &[("id", id.as_str())]).await
    }

    /// Create an invoice.
    pub async fn create(&self, request: &InvoiceCreateRequest) -> Result<Invoice> {
        self.inner.post(&CREATE_INVOICE, &[], request).await
    }

    /// Update an invoice; absent fields are left unchanged.
    pub async fn update(&self, id: &InvoiceId, request: &InvoiceUpdateRequest) -> Result<Invoice> {
        self.inner
            .put(&UPDATE_INVOICE, &[("id", id.as_str())], request)
            .await
    }

    /// Cancel an invoice before payment.
    pub async fn cancel(&self, id: &InvoiceId) -> Result<()> {
        self.inner
            .post_no_content(&CANCEL_INVOICE, &[("id", id.as_str())])
            .await
    }
}
