//! Listing state machine: paging, sorting, filtering and record actions.

use thiserror::Error;

use crate::client::api::{ApiError, ApiResult, WorkationApi};
use crate::domain::risk::Risk;
use crate::domain::types::WorkationId;
use crate::domain::workation::{NewWorkation, Workation};
use crate::dto::query::{ListingQuery, SortDirection};
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_WINDOW, Page, page_window};

pub const DEFAULT_SORT_FIELD: &str = "id";

pub const LOAD_ERROR: &str = "Failed to load workations";
pub const DELETE_ERROR: &str = "Failed to delete workation";
pub const SAVE_ERROR: &str = "Failed to save workation";

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this workation?";

/// User confirmation for destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Everything the listing view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub records: Vec<Workation>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            total_elements: 0,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Asc,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Active listing filters. Empty means unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub employee: Option<String>,
    pub country: Option<String>,
    pub country_dest: Option<String>,
    pub risk: Option<Risk>,
}

/// A listing request that has been issued but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub query: ListingQuery,
}

/// Drives a [`WorkationApi`] on behalf of the listing view.
///
/// Every listing request gets a sequence number. Only the response to the
/// most recently issued request is applied; earlier ones are dropped.
pub struct ListingController<A> {
    api: A,
    state: ListingState,
    filters: ListingFilters,
    pending_page_size: usize,
    issued: u64,
}

impl<A: WorkationApi> ListingController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ListingState::default(),
            filters: ListingFilters::default(),
            pending_page_size: DEFAULT_PAGE_SIZE,
            issued: 0,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn base_query(&self) -> ListingQuery {
        let mut query = ListingQuery::new()
            .size(self.state.page_size)
            .sort(self.state.sort_by.clone(), self.state.sort_direction);
        query.employee = self.filters.employee.clone();
        query.country = self.filters.country.clone();
        query.country_dest = self.filters.country_dest.clone();
        query.risk = self.filters.risk;
        query
    }

    fn page_query(&self, page: usize) -> ListingQuery {
        self.base_query().page(page)
    }

    /// Registers a listing request and marks the state as loading.
    pub fn begin_load(&mut self, query: ListingQuery) -> LoadTicket {
        self.issued += 1;
        self.state.loading = true;
        self.state.error = None;
        LoadTicket {
            seq: self.issued,
            query,
        }
    }

    /// Applies the outcome of request `seq`. Returns `false` when a newer
    /// request has been issued since and the outcome was discarded.
    pub fn finish_load(&mut self, seq: u64, result: ApiResult<Page<Workation>>) -> bool {
        if seq != self.issued {
            log::debug!("Discarding stale listing response #{seq}, latest is #{}", self.issued);
            return false;
        }

        self.state.loading = false;
        match result {
            Ok(page) => {
                self.state.current_page = page.number;
                self.state.page_size = page.size;
                self.state.total_pages = page.total_pages;
                self.state.total_elements = page.total_elements;
                self.state.records = page.content;
            }
            Err(err) => {
                log::error!("Error loading workations: {err}");
                self.state.error = Some(LOAD_ERROR.to_string());
            }
        }
        true
    }

    async fn load(&mut self, query: ListingQuery) {
        let ticket = self.begin_load(query);
        let result = self.api.list(&ticket.query).await;
        self.finish_load(ticket.seq, result);
    }

    async fn reload(&mut self) {
        self.load(self.page_query(self.state.current_page)).await;
    }

    /// First load with the default sort and page size.
    pub async fn init(&mut self) {
        self.load(self.base_query()).await;
    }

    /// Sorts by `column`, flipping the direction when it is already the sort field.
    pub async fn sort_by(&mut self, column: &str) {
        if self.state.sort_by == column {
            self.state.sort_direction = self.state.sort_direction.toggle();
        } else {
            self.state.sort_by = column.to_string();
            self.state.sort_direction = SortDirection::Asc;
        }
        self.state.current_page = 0;
        self.reload().await;
    }

    /// Stages a page size; it takes effect on [`Self::apply_page_size`].
    pub fn set_pending_page_size(&mut self, size: usize) {
        self.pending_page_size = size;
    }

    pub async fn apply_page_size(&mut self) {
        self.state.page_size = self.pending_page_size;
        self.state.current_page = 0;
        self.reload().await;
    }

    pub async fn set_filters(&mut self, filters: ListingFilters) {
        self.filters = filters;
        self.state.current_page = 0;
        self.reload().await;
    }

    /// Moves one page forward. Returns `false` on the last page.
    pub async fn next_page(&mut self) -> bool {
        let next = self.state.current_page.saturating_add(1);
        if next >= self.state.total_pages {
            return false;
        }
        self.load(self.page_query(next)).await;
        true
    }

    /// Moves one page back. Returns `false` on the first page.
    pub async fn previous_page(&mut self) -> bool {
        if self.state.current_page == 0 {
            return false;
        }
        self.load(self.page_query(self.state.current_page - 1)).await;
        true
    }

    /// Loads `page`. Page 0 is always accepted, so an empty listing can be refreshed.
    pub async fn go_to_page(&mut self, page: usize) -> Result<(), ListingError> {
        if page != 0 && page >= self.state.total_pages {
            return Err(ListingError::PageOutOfRange {
                page,
                total_pages: self.state.total_pages,
            });
        }
        self.load(self.page_query(page)).await;
        Ok(())
    }

    /// Page indices to render as links.
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.state.total_pages, self.state.current_page, PAGE_WINDOW)
    }

    /// Deletes `id` once `confirm` agrees, then reloads the current page.
    ///
    /// Returns `false` when the user declined and nothing was sent.
    pub async fn delete(&mut self, id: WorkationId, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            return false;
        }

        match self.api.delete(id).await {
            Ok(()) => self.reload().await,
            Err(err) => {
                log::error!("Error deleting workation {id}: {err}");
                self.state.error = Some(DELETE_ERROR.to_string());
            }
        }
        true
    }

    pub async fn create(&mut self, workation: &NewWorkation) -> ApiResult<Workation> {
        let result = self.api.create(workation).await;
        self.after_save(result).await
    }

    pub async fn update(
        &mut self,
        id: WorkationId,
        workation: &NewWorkation,
    ) -> ApiResult<Workation> {
        let result = self.api.update(id, workation).await;
        self.after_save(result).await
    }

    async fn after_save(&mut self, result: ApiResult<Workation>) -> ApiResult<Workation> {
        match result {
            Ok(saved) => {
                self.reload().await;
                Ok(saved)
            }
            Err(err) => {
                log::error!("Error saving workation: {err}");
                self.state.error = Some(SAVE_ERROR.to_string());
                Err(err)
            }
        }
    }

    pub fn edit(&self, workation: &Workation) {
        log::info!("Edit workation: {}", workation.id);
    }
}

/// Returns `true` when `err` should be shown as a missing record.
pub fn is_not_found(err: &ApiError) -> bool {
    matches!(err, ApiError::NotFound { .. })
}
