//! Paginated stream for lazy iteration over list endpoints.
//!
//! List operations return a page of items plus an opaque continuation
//! cursor. [`PaginatedStream`] implements the `Stream` trait over those
//! pages: items are yielded lazily, the next page is fetched when the
//! current one is exhausted, and the walk ends either cleanly (no cursor)
//! or with a single terminal error item, so consumers can always tell
//! "sequence ended" apart from "sequence failed".
//!
//! Each entry point starts an independent walk with fresh state; walks are
//! forward-only and never shared between callers.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::descriptor::OperationDescriptor;
use super::ClientInner;
use crate::{Error, Result};

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// One page of a listing: the items plus the continuation cursor.
#[derive(Debug)]
pub struct Page<T> {
    /// Items in this page, in server order.
    pub items: Vec<T>,
    /// Cursor for the next page; `None` means the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// A deserialized list-endpoint response that can be turned into a page.
///
/// Mercury list responses wrap their items in a resource-named field
/// (`accounts`, `transactions`, ...) and carry an optional `nextCursor`.
/// When the server omits the cursor, a full page derives one from the last
/// item id so the walk can continue; a short page means exhaustion.
pub trait PageResponse {
    /// The item type yielded by the walk.
    type Item;

    /// Split the response into items and continuation cursor.
    fn into_page(self, page_size: i64) -> Page<Self::Item>;
}

/// Derive a continuation cursor for responses without a server-side one.
pub(crate) fn derive_cursor<T>(
    explicit: Option<String>,
    items: &[T],
    page_size: i64,
    id_of: impl Fn(&T) -> String,
) -> Option<String> {
    if explicit.is_some() {
        return explicit;
    }
    if items.len() as i64 >= page_size {
        items.last().map(&id_of)
    } else {
        None
    }
}

type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;
type FetchPage<T> =
    Box<dyn Fn(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

enum WalkState {
    /// The next fetch should use this cursor (`None` = first page).
    Next(Option<String>),
    /// No further pages will be requested.
    Finished,
}

/// A stream that lazily fetches pages from a cursor-paginated endpoint.
///
/// # Example
///
/// ```no_run
/// use futures_util::TryStreamExt;
///
/// # async fn example(client: mercury_bank::MercuryClient) -> mercury_bank::Result<()> {
/// let mut stream = client.accounts().list_stream(None);
/// while let Some(account) = stream.try_next().await? {
///     println!("{}: {}", account.id, account.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    operation: &'static str,
    fetch_page: FetchPage<T>,
    current_items: Vec<T>,
    state: WalkState,
    /// Cursor the in-flight fetch was issued with, for stall detection.
    in_flight_cursor: Option<String>,
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
    cancel: CancellationToken,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    /// Create a stream over the given page-fetch function.
    pub fn new<F>(operation: &'static str, cancel: CancellationToken, fetch_page: F) -> Self
    where
        F: Fn(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            operation,
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new(),
            state: WalkState::Next(None),
            in_flight_cursor: None,
            pending_fetch: None,
            cancel,
        }
    }
}

impl<T> Stream for PaginatedStream<T>
where
    T: Unpin,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            // Yield buffered items first: items from an already-received
            // page stay valid even after cancellation.
            if !this.current_items.is_empty() {
                let item = this.current_items.remove(0);
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;

                        // A repeated cursor would loop forever against a
                        // misbehaving upstream; stop and report it.
                        if page.next_cursor.is_some()
                            && page.next_cursor == this.in_flight_cursor
                        {
                            this.state = WalkState::Finished;
                            let cursor = page.next_cursor.unwrap_or_default();
                            return Poll::Ready(Some(Err(Error::PaginationStall {
                                operation: this.operation,
                                cursor,
                            })));
                        }

                        this.current_items = page.items;
                        this.state = match page.next_cursor {
                            Some(cursor) => WalkState::Next(Some(cursor)),
                            None => WalkState::Finished,
                        };

                        // An empty page with a cursor is still followed;
                        // an empty page without one ends the walk.
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.state = WalkState::Finished;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match std::mem::replace(&mut this.state, WalkState::Finished) {
                WalkState::Next(cursor) => {
                    if this.cancel.is_cancelled() {
                        return Poll::Ready(Some(Err(Error::Cancelled)));
                    }
                    this.in_flight_cursor = cursor.clone();
                    this.pending_fetch = Some((this.fetch_page)(cursor));
                }
                WalkState::Finished => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Which query-parameter name carries the walk cursor.
///
/// Most Mercury list endpoints page with `start_after`; the treasury
/// transactions endpoint names the same thing `cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorParam {
    StartAfter,
    Cursor,
}

/// Flatten a serializable filter into query pairs, dropping absent fields.
fn extend_query_pairs<Q: Serialize>(
    operation: &'static str,
    pairs: &mut Vec<(String, String)>,
    query: &Q,
) -> Result<()> {
    let value = serde_json::to_value(query)
        .map_err(|e| Error::InvalidRequest(format!("unserializable query: {e}")))?;
    match value {
        serde_json::Value::Null => Ok(()),
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                let rendered = match value {
                    serde_json::Value::Null => continue,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                pairs.push((key, rendered));
            }
            Ok(())
        }
        _ => Err(Error::InvalidRequest(format!(
            "query for operation {operation} must serialize to an object"
        ))),
    }
}

/// Builder for paginated streams over a descriptor-driven list endpoint.
pub(crate) struct PaginatedStreamBuilder<R> {
    inner: Arc<ClientInner>,
    descriptor: &'static OperationDescriptor,
    path_params: Vec<(&'static str, String)>,
    page_size: i64,
    cursor_param: CursorParam,
    _marker: std::marker::PhantomData<R>,
}

impl<R> PaginatedStreamBuilder<R>
where
    R: PageResponse + DeserializeOwned + Send + 'static,
    R::Item: Send + 'static,
{
    pub(crate) fn new(inner: Arc<ClientInner>, descriptor: &'static OperationDescriptor) -> Self {
        Self {
            inner,
            descriptor,
            path_params: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            cursor_param: CursorParam::StartAfter,
            _marker: std::marker::PhantomData,
        }
    }

    pub(crate) fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    pub(crate) fn page_size(mut self, page_size: Option<i64>) -> Self {
        self.page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        self
    }

    pub(crate) fn cursor_param(mut self, cursor_param: CursorParam) -> Self {
        self.cursor_param = cursor_param;
        self
    }

    /// Build the stream with optional extra filter parameters.
    pub(crate) fn build_with_query<Q>(self, query: Option<Q>) -> PaginatedStream<R::Item>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let descriptor = self.descriptor;
        let path_params = self.path_params;
        let page_size = self.page_size;
        let cursor_param = self.cursor_param;
        let cancel = inner.cancel.clone();

        PaginatedStream::new(descriptor.name, cancel, move |cursor: Option<String>| {
            let inner = inner.clone();
            let path_params = path_params.clone();
            let query = query.clone();

            Box::pin(async move {
                let mut page_query: Vec<(String, String)> =
                    vec![("limit".to_string(), page_size.to_string())];
                if let Some(cursor) = cursor {
                    let name = match cursor_param {
                        CursorParam::StartAfter => "start_after",
                        CursorParam::Cursor => "cursor",
                    };
                    page_query.push((name.to_string(), cursor));
                }
                if let Some(ref query) = query {
                    extend_query_pairs(descriptor.name, &mut page_query, query)?;
                }

                let params: Vec<(&str, &str)> = path_params
                    .iter()
                    .map(|(name, value)| (*name, value.as_str()))
                    .collect();
                let response: R = inner
                    .get_with_query(descriptor, &params, &page_query)
                    .await?;
                Ok(response.into_page(page_size))
            })
        })
    }

    /// Build the stream without extra filter parameters.
    pub(crate) fn build(self) -> PaginatedStream<R::Item> {
        self.build_with_query::<()>(None)
    }
}
