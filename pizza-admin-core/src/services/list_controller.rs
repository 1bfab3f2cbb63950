//! Paginated, filterable list controller
//!
//! One instance backs one tab. It owns the tab's query and last committed
//! result; every state change goes through the [`FetchTrigger`] so the server
//! is asked exactly once per distinct `(tab active, page, pattern)`.
//!
//! Deletes run as a two-step transaction: re-fetch the current page, and if
//! that page came back empty while not on the first page, fetch and commit the
//! previous page instead.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::fetch_trigger::{FetchInputs, FetchTicket, FetchTrigger, TabGate};
use crate::traits::{ListSource, RemovableSource};
use crate::types::{Identified, ListQuery, ListResult, NamePattern, ResourceKind};

/// What happened to a fetch handed to [`ListController::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Inputs unchanged (or tab inactive); nothing was requested.
    Idle,
    /// The response replaced the visible result.
    Committed,
    /// A newer request was issued meanwhile; the response was dropped.
    Discarded,
}

/// Result of re-synchronizing after a row disappeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row had no identifier; nothing was sent.
    Skipped,
    /// The current page still had rows (or is page 0) and was committed as-is.
    Stayed { page: u32 },
    /// The current page emptied out; the previous page was committed.
    SteppedBack { from: u32, to: u32 },
    /// The tab is hidden; the re-read waits for the next activation.
    Deferred,
}

pub struct ListController<S: ListSource> {
    source: Arc<S>,
    query: ListQuery,
    result: ListResult<S::Item>,
    tab_active: bool,
    trigger: FetchTrigger,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: Arc<S>, gate: TabGate) -> Self {
        let page_size = source.kind().page_size();
        Self {
            source,
            query: ListQuery::first_page(page_size),
            result: ListResult::default(),
            tab_active: false,
            trigger: FetchTrigger::new(gate, page_size),
        }
    }

    // ===== Read side =====

    pub fn kind(&self) -> ResourceKind {
        self.source.kind()
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn result(&self) -> &ListResult<S::Item> {
        &self.result
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn pattern(&self) -> &NamePattern {
        &self.query.pattern
    }

    pub fn is_active(&self) -> bool {
        self.tab_active
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.result.more && self.query.page < u32::MAX
    }

    /// The committed page has no rows: render the explicit "no rows" state.
    pub fn shows_empty_state(&self) -> bool {
        self.result.is_empty()
    }

    // ===== State changes (no I/O) =====

    /// Move to `page`. Not clamped; callers gate with the boundary predicates.
    pub fn apply_page(&mut self, page: u32) -> Option<FetchTicket> {
        self.query.page = page;
        self.observe()
    }

    /// Normalize `raw` into the name pattern and go back to the first page.
    pub fn apply_filter(&mut self, raw: &str) -> Option<FetchTicket> {
        self.query.pattern = NamePattern::from_input(raw);
        self.query.page = 0;
        self.observe()
    }

    /// Mark the tab shown or hidden, optionally resetting to the first page.
    pub fn apply_activation(&mut self, active: bool, reset_page: bool) -> Option<FetchTicket> {
        self.tab_active = active;
        if reset_page {
            self.query.page = 0;
        }
        self.observe()
    }

    /// Ticket for the current inputs whether or not they changed.
    pub fn apply_refresh(&mut self) -> Option<FetchTicket> {
        let inputs = self.inputs();
        self.trigger.force(inputs)
    }

    /// Install the response for `ticket` unless a newer request superseded it.
    ///
    /// A failed response for the latest ticket leaves the previous result in
    /// place and is returned to the caller.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        response: CoreResult<ListResult<S::Item>>,
    ) -> CoreResult<FetchOutcome> {
        if !self.trigger.is_latest(ticket) {
            log::debug!(
                "Discarding stale {} page {} (seq {}, latest {})",
                self.kind(),
                ticket.query().page,
                ticket.seq(),
                self.trigger.latest_seq()
            );
            return Ok(FetchOutcome::Discarded);
        }
        match response {
            Ok(result) => {
                self.result = result;
                Ok(FetchOutcome::Committed)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Fetching {} page {} failed: {e}", self.kind(), ticket.query().page);
                } else {
                    log::error!("Fetching {} page {} failed: {e}", self.kind(), ticket.query().page);
                }
                Err(e)
            }
        }
    }

    // ===== Actions =====

    /// Issue and settle the request for `ticket`, if any.
    pub async fn run(&mut self, ticket: Option<FetchTicket>) -> CoreResult<FetchOutcome> {
        let Some(ticket) = ticket else {
            return Ok(FetchOutcome::Idle);
        };
        let response = self.source.fetch(ticket.query()).await;
        self.complete_fetch(&ticket, response)
    }

    /// Fetch if the tracked inputs changed since the last fetch.
    pub async fn sync(&mut self) -> CoreResult<FetchOutcome> {
        let ticket = self.observe();
        self.run(ticket).await
    }

    pub async fn set_page(&mut self, page: u32) -> CoreResult<FetchOutcome> {
        let ticket = self.apply_page(page);
        self.run(ticket).await
    }

    /// Go forward one page; `Ok(false)` when the server reported no more rows.
    pub async fn next_page(&mut self) -> CoreResult<bool> {
        let Some(next) = self.query.page.checked_add(1).filter(|_| self.can_go_next()) else {
            return Ok(false);
        };
        self.set_page(next).await?;
        Ok(true)
    }

    /// Go back one page; `Ok(false)` on the first page.
    pub async fn previous_page(&mut self) -> CoreResult<bool> {
        if !self.can_go_previous() {
            return Ok(false);
        }
        self.set_page(self.query.page - 1).await?;
        Ok(true)
    }

    pub async fn submit_filter(&mut self, raw: &str) -> CoreResult<FetchOutcome> {
        let ticket = self.apply_filter(raw);
        self.run(ticket).await
    }

    pub async fn set_active(&mut self, active: bool, reset_page: bool) -> CoreResult<FetchOutcome> {
        let ticket = self.apply_activation(active, reset_page);
        self.run(ticket).await
    }

    pub async fn refresh(&mut self) -> CoreResult<FetchOutcome> {
        let ticket = self.apply_refresh();
        self.run(ticket).await
    }

    /// Re-read the current page after rows were removed elsewhere, stepping
    /// back one page if the current one is now empty.
    ///
    /// Nothing is committed until both fetches resolved; on error the previous
    /// page and result stay visible. A gated controller that is not active
    /// issues nothing and reports [`DeleteOutcome::Deferred`].
    pub async fn resync_after_mutation(&mut self) -> CoreResult<DeleteOutcome> {
        if self.trigger.gate() == TabGate::WhenActive && !self.is_active() {
            log::debug!("{} tab hidden, re-read deferred to activation", self.kind());
            return Ok(DeleteOutcome::Deferred);
        }

        let page = self.query.page;
        let ticket = self.trigger.issue(self.query.clone());

        let current = self.source.fetch(ticket.query()).await?;
        if !current.is_empty() || page == 0 {
            self.commit(page, current);
            return Ok(DeleteOutcome::Stayed { page });
        }

        let previous_page = page - 1;
        log::debug!(
            "{} page {page} emptied after mutation, stepping back to {previous_page}",
            self.kind()
        );
        let previous = self
            .source
            .fetch(&ticket.query().at_page(previous_page))
            .await?;
        self.commit(previous_page, previous);
        Ok(DeleteOutcome::SteppedBack {
            from: page,
            to: previous_page,
        })
    }

    fn commit(&mut self, page: u32, result: ListResult<S::Item>) {
        self.query.page = page;
        self.result = result;
        let inputs = self.inputs();
        self.trigger.settle(inputs);
    }

    fn inputs(&self) -> FetchInputs {
        FetchInputs {
            tab_active: self.tab_active,
            page: self.query.page,
            pattern: self.query.pattern.clone(),
        }
    }

    fn observe(&mut self) -> Option<FetchTicket> {
        let inputs = self.inputs();
        self.trigger.observe(inputs)
    }
}

impl<S: RemovableSource> ListController<S> {
    /// Delete `row` and re-synchronize the page.
    ///
    /// A row without identifier is skipped. A `NotFound` from the server counts
    /// as deleted.
    pub async fn delete_row(&mut self, row: &S::Item) -> CoreResult<DeleteOutcome> {
        let Some(id) = row.row_id() else {
            log::debug!("Skipping delete of {} row without id", self.kind());
            return Ok(DeleteOutcome::Skipped);
        };

        match self.source.remove(id).await {
            Ok(()) => log::info!("Deleted {} {id}", self.kind()),
            Err(e) if e.is_not_found() => {
                log::warn!("{} {id} was already gone, refreshing anyway", self.kind());
            }
            Err(e) => return Err(e),
        }

        self.resync_after_mutation().await
    }
}
