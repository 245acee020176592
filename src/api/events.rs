//! Events service for the organization audit log.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Deserialize;

use crate::client::paginated::{
    derive_cursor, Page, PageResponse, PaginatedStream, PaginatedStreamBuilder,
};
use crate::client::{ClientInner, OperationDescriptor};
use crate::models::{ApiEvent, EventId};
use crate::Result;

static LIST_EVENTS: OperationDescriptor = OperationDescriptor::get("list_events", "/events");
static GET_EVENT: OperationDescriptor = OperationDescriptor::get("get_event", "/event/{id}");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EventsPage {
    events: Vec<ApiEvent>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl PageResponse for EventsPage {
    type Item = ApiEvent;

    fn into_page(self, page_size: i64) -> Page<ApiEvent> {
        let next_cursor =
            derive_cursor(self.next_cursor, &self.events, page_size, |e| {
                e.id.to_string()
            });
        Page {
            items: self.events,
            next_cursor,
        }
    }
}

/// Service for audit-event operations.
pub struct EventsService {
    inner: Arc<ClientInner>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all audit events, draining every page.
    pub async fn list(&self, page_size: Option<i64>) -> Result<Vec<ApiEvent>> {
        self.list_stream(page_size).try_collect().await
    }

    /// Stream audit events lazily, one page at a time.
    pub fn list_stream(&self, page_size: Option<i64>) -> PaginatedStream<ApiEvent> {
        PaginatedStreamBuilder::<EventsPage>::new(self.inner.clone(), &LIST_EVENTS)
            .page_size(page_size.or(Some(self.inner.config.default_page_size)))
            .build()
    }

    /// Get a single audit event by id.
    pub async fn get(&self, id: &EventId) -> Result<ApiEvent> {
        self.inner.get(&GET_EVENT, &[("id", id.as_str())]).await
    }
}
