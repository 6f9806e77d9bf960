//! Paginated remote-fetch controller
//!
//! One controller per mounted grid view. It owns page/sort state and the
//! current filter values, issues the count+data request pair against the
//! transport collaborator, and publishes the winning response to the
//! view layer over a watch channel.
//!
//! Concurrency model: rapid filter/page changes can put several fetch
//! cycles in flight at once. Nothing is cancelled at the network layer;
//! instead every cycle carries a monotonically increasing sequence token
//! and only the newest-issued cycle may touch view state. A late
//! response with a lower token is discarded without side effects.


use crate::FilterRuleBuilder;
use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use stratus_core::{
    Envelope, ListRequest, PageState, QuerySpec, Result, Row, SortOrder, Transport,
};
use tokio::sync::watch;
use uuid::Uuid;

/// How list fetches are issued against the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMethod {
    /// POST with a `{filter, page}` JSON body
    #[default]
    Post,
    /// GET with page fields as query parameters and the filter as a
    /// JSON-encoded `filter` parameter (legacy endpoints)
    Get,
}

/// Static configuration of one grid's fetch behavior
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// List endpoint URL
    pub url: String,
    /// HTTP shape of the endpoint
    pub method: FetchMethod,
    /// Dot path to the row array inside the response envelope
    pub data_path: String,
    /// Dot path to the total count inside the count response
    pub count_path: String,
    /// Initial page size
    pub default_limit: u64,
}

impl FetchConfig {
    /// Config for a POST endpoint with the common envelope paths
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: FetchMethod::Post,
            data_path: "data.info".to_string(),
            count_path: "data.count".to_string(),
            default_limit: 10,
        }
    }

    pub fn method(mut self, method: FetchMethod) -> Self {
        self.method = method;
        self
    }

    pub fn data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn count_path(mut self, path: impl Into<String>) -> Self {
        self.count_path = path.into();
        self
    }

    pub fn default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }
}

/// Fetch lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Ready,
}

/// Pagination snapshot handed to the pager widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u64,
    pub limit: u64,
    pub count: u64,
}

/// Reactive output of the controller: everything the grid renders from
#[derive(Debug, Clone, PartialEq)]
pub struct GridOutput {
    pub rows: Vec<Row>,
    pub pagination: Pagination,
    pub loading: bool,
}

impl GridOutput {
    fn initial(limit: u64) -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination {
                current: 1,
                limit,
                count: 0,
            },
            loading: false,
        }
    }
}

/// What happened to one fetch cycle
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Cycle id, for log correlation
    pub cycle_id: Uuid,
    /// Sequence token assigned at issue time
    pub token: u64,
    /// Whether this cycle's response was applied to view state
    /// (false means a newer cycle superseded it)
    pub applied: bool,
    /// Rows in the data response
    pub rows: usize,
    /// Total from the count response, if the envelope carried one
    pub count: Option<u64>,
    pub duration_ms: u64,
}

struct Inner {
    filters: FilterRuleBuilder,
    page: PageState,
    phase: Phase,
}

/// Paginated remote-fetch controller for one grid view.
///
/// State transitions (`set_filters`, `set_limit`, `set_sort`) jump back
/// to page 1 and fetch immediately unless told otherwise;
/// [`go_to_page`](Self::go_to_page) moves within the current result and
/// [`refresh`](Self::refresh) refetches without touching pagination.
pub struct PaginatedQueryController {
    transport: Arc<dyn Transport>,
    config: FetchConfig,
    inner: Mutex<Inner>,
    seq: AtomicU64,
    output: watch::Sender<GridOutput>,
}

impl PaginatedQueryController {
    /// Create a controller. `filters` carries the per-view operator map
    /// and static rules; its values start empty.
    pub fn new(
        transport: Arc<dyn Transport>,
        config: FetchConfig,
        filters: FilterRuleBuilder,
    ) -> Self {
        let initial = GridOutput::initial(config.default_limit);
        let (output, _) = watch::channel(initial);
        let page = PageState::new(config.default_limit);

        Self {
            transport,
            config,
            inner: Mutex::new(Inner {
                filters,
                page,
                phase: Phase::Idle,
            }),
            seq: AtomicU64::new(0),
            output,
        }
    }

    /// Subscribe to reactive output changes
    pub fn subscribe(&self) -> watch::Receiver<GridOutput> {
        self.output.subscribe()
    }

    /// Current output snapshot
    pub fn snapshot(&self) -> GridOutput {
        self.output.borrow().clone()
    }

    /// Current fetch phase
    pub fn phase(&self) -> Phase {
        self.inner.lock().phase
    }

    /// Current page state
    pub fn page_state(&self) -> PageState {
        self.inner.lock().page.clone()
    }

    /// The filter spec the next fetch would send
    pub fn current_filter(&self) -> QuerySpec {
        self.inner.lock().filters.build()
    }

    /// Replace the filter values and jump back to page 1
    pub async fn set_filters(
        &self,
        values: IndexMap<String, Value>,
        immediate: bool,
    ) -> Result<Option<FetchOutcome>> {
        {
            let mut inner = self.inner.lock();
            inner.filters.replace_values(values);
            inner.page.reset_page();
        }
        self.maybe_fetch(immediate).await
    }

    /// Change the page size and jump back to page 1
    pub async fn set_limit(&self, limit: u64, immediate: bool) -> Result<Option<FetchOutcome>> {
        {
            let mut inner = self.inner.lock();
            inner.page.set_limit(limit);
        }
        self.maybe_fetch(immediate).await
    }

    /// Set or clear the sort column and jump back to page 1
    pub async fn set_sort(
        &self,
        sort: Option<String>,
        order: Option<SortOrder>,
        immediate: bool,
    ) -> Result<Option<FetchOutcome>> {
        {
            let mut inner = self.inner.lock();
            inner.page.set_sort(sort, order);
        }
        self.maybe_fetch(immediate).await
    }

    /// Move to a page within the current result set
    pub async fn go_to_page(&self, current: u64, immediate: bool) -> Result<Option<FetchOutcome>> {
        {
            let mut inner = self.inner.lock();
            inner.page.set_page(current);
        }
        self.maybe_fetch(immediate).await
    }

    /// Re-issue a fetch with current state, without resetting pagination.
    ///
    /// The count and data requests are independent; if the dataset
    /// mutates between them the total and the rows may describe
    /// different snapshots. The backend offers no versioned reads, so
    /// this layer does not try to reconcile beyond the per-cycle token.
    pub async fn refresh(&self) -> Result<FetchOutcome> {
        self.fetch().await
    }

    /// Pager widget hook: the user picked a page
    pub async fn on_page_value_change(&self, current: u64) -> Result<FetchOutcome> {
        {
            self.inner.lock().page.set_page(current);
        }
        self.fetch().await
    }

    /// Pager widget hook: the user changed the page size
    pub async fn on_page_limit_change(&self, limit: u64) -> Result<FetchOutcome> {
        {
            self.inner.lock().page.set_limit(limit);
        }
        self.fetch().await
    }

    /// Header hook: the user toggled a sort column
    pub async fn on_sort_change(
        &self,
        field: Option<String>,
        order: Option<SortOrder>,
    ) -> Result<FetchOutcome> {
        {
            self.inner.lock().page.set_sort(field, order);
        }
        self.fetch().await
    }

    async fn maybe_fetch(&self, immediate: bool) -> Result<Option<FetchOutcome>> {
        if immediate {
            self.fetch().await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// One logical fetch cycle: a data request and a count request,
    /// issued in parallel, reconciled under this cycle's token.
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch(&self) -> Result<FetchOutcome> {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let cycle_id = Uuid::new_v4();
        let start = Instant::now();

        let (filter, data_params, count_params) = {
            let mut inner = self.inner.lock();
            inner.phase = Phase::Fetching;
            (
                inner.filters.build(),
                inner.page.data_params(),
                inner.page.count_params(),
            )
        };
        self.publish(|output| output.loading = true);

        tracing::debug!(
            cycle = %cycle_id,
            token,
            rules = filter.rules.len(),
            start = data_params.start,
            limit = data_params.limit,
            "issuing fetch cycle"
        );

        let data_request = ListRequest {
            filter: filter.clone(),
            page: data_params,
        };
        let count_request = ListRequest {
            filter,
            page: count_params,
        };

        let (data_response, count_response) = futures::join!(
            self.issue(&data_request),
            self.issue(&count_request),
        );
        let duration_ms = start.elapsed().as_millis() as u64;

        let extracted = data_response.and_then(|envelope| {
            let rows = envelope.rows_at(&self.config.data_path)?;
            let count = count_response?.count_at(&self.config.count_path);
            Ok((rows, count))
        });

        // Newest-token-wins: a cycle superseded while in flight must not
        // touch view state, success or failure alike. The token check and
        // the apply happen under the same lock so a newer cycle finishing
        // concurrently cannot be overwritten.
        let (rows, count) = match extracted {
            Ok(pair) => pair,
            Err(error) => {
                let mut inner = self.inner.lock();
                if token == self.seq.load(Ordering::SeqCst) {
                    tracing::warn!(cycle = %cycle_id, token, %error, "fetch cycle failed");
                    inner.page.count = 0;
                    inner.phase = Phase::Ready;
                    let pagination = Pagination {
                        current: inner.page.current,
                        limit: inner.page.limit,
                        count: inner.page.count,
                    };
                    self.publish(|output| {
                        output.rows = Vec::new();
                        output.pagination = pagination;
                        output.loading = false;
                    });
                } else {
                    tracing::debug!(cycle = %cycle_id, token, %error, "discarding stale failed cycle");
                }
                return Err(error);
            }
        };

        let applied_rows = rows.len();
        let total = {
            let mut inner = self.inner.lock();
            let newest = self.seq.load(Ordering::SeqCst);
            if token != newest {
                tracing::debug!(cycle = %cycle_id, token, newest, "discarding stale response");
                return Ok(FetchOutcome {
                    cycle_id,
                    token,
                    applied: false,
                    rows: applied_rows,
                    count,
                    duration_ms,
                });
            }

            match count {
                Some(total) => inner.page.count = total,
                // Never inferred from rows.len(); keep the previous total.
                None => tracing::warn!(cycle = %cycle_id, "count response carried no total"),
            }
            inner.phase = Phase::Ready;

            let pagination = Pagination {
                current: inner.page.current,
                limit: inner.page.limit,
                count: inner.page.count,
            };
            self.publish(move |output| {
                output.rows = rows;
                output.pagination = pagination;
                output.loading = false;
            });
            inner.page.count
        };

        tracing::info!(
            cycle = %cycle_id,
            token,
            rows = applied_rows,
            count = total,
            duration_ms,
            "fetch cycle applied"
        );

        Ok(FetchOutcome {
            cycle_id,
            token,
            applied: true,
            rows: applied_rows,
            count,
            duration_ms,
        })
    }

    /// Issue one physical request in the configured HTTP shape
    async fn issue(&self, request: &ListRequest) -> Result<Envelope> {
        let response = match self.config.method {
            FetchMethod::Post => {
                let body = serde_json::to_value(request)?;
                self.transport.post(&self.config.url, &body).await?
            }
            FetchMethod::Get => {
                let params = Self::query_params(request)?;
                self.transport.get(&self.config.url, &params).await?
            }
        };
        Ok(Envelope::new(response))
    }

    /// Flatten a list request into query parameters for GET endpoints
    fn query_params(request: &ListRequest) -> Result<HashMap<String, String>> {
        let mut params = HashMap::new();
        params.insert("start".to_string(), request.page.start.to_string());
        params.insert("limit".to_string(), request.page.limit.to_string());
        params.insert("count".to_string(), request.page.count.to_string());
        if let Some(sort) = &request.page.sort {
            params.insert("sort".to_string(), sort.clone());
        }
        if let Some(order) = request.page.order {
            let order = serde_json::to_value(order)?;
            if let Some(order) = order.as_str() {
                params.insert("order".to_string(), order.to_string());
            }
        }
        if !request.filter.is_empty() {
            params.insert(
                "filter".to_string(),
                serde_json::to_string(&request.filter)?,
            );
        }
        Ok(params)
    }

    fn publish(&self, mutate: impl FnOnce(&mut GridOutput)) {
        self.output.send_modify(mutate);
    }
}

impl std::fmt::Debug for PaginatedQueryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedQueryController")
            .field("url", &self.config.url)
            .field("phase", &self.inner.lock().phase)
            .finish_non_exhaustive()
    }
}