//! Admin dashboard
//!
//! Composes the franchise and user list controllers behind a tab selector.
//! All operator input arrives as a [`DashboardAction`]; failures are both
//! returned and recorded as a [`Notice`] for the screen to show.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::services::fetch_trigger::TabGate;
use crate::services::list_controller::{DeleteOutcome, FetchOutcome, ListController};
use crate::services::sources::{FranchiseSource, UserSource};
use crate::services::tab_selector::{Tab, TabChange, TabSelector};
use crate::services::ServiceContext;
use crate::types::{AdminCapability, Franchise, User};

/// Operator intents
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    // ========== 标签 ==========
    SelectTab(Tab),
    NextTab,

    // ========== 分页 / 过滤（作用于当前标签） ==========
    NextPage,
    PreviousPage,
    SetPage(u32),
    SubmitFilter(String),
    Refresh,

    // ========== 删除 ==========
    DeleteUser(User),
    /// Confirmed from the close-franchise screen.
    CloseFranchise(Franchise),
    /// Confirmed from the close-store screen.
    CloseStore {
        franchise_id: String,
        store_id: String,
    },

    DismissNotice,
}

/// Error state the screen has to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Full-screen access denied; sticky.
    AccessDenied(String),
    /// Inline banner above the still-visible rows.
    Banner(String),
}

pub struct AdminDashboard {
    capability: AdminCapability,
    tabs: TabSelector,
    franchises: ListController<FranchiseSource>,
    users: ListController<UserSource>,
    notice: Option<Notice>,
}

impl AdminDashboard {
    /// Build the dashboard for a viewer already known to be an admin.
    #[must_use]
    pub fn new(ctx: &ServiceContext, capability: AdminCapability) -> Self {
        Self {
            capability,
            tabs: TabSelector::new(),
            franchises: ListController::new(Arc::new(ctx.franchise_source()), TabGate::Always),
            users: ListController::new(Arc::new(ctx.user_source()), TabGate::WhenActive),
            notice: None,
        }
    }

    /// Build the dashboard if `viewer` holds the admin role.
    pub fn for_viewer(ctx: &ServiceContext, viewer: Option<&User>) -> CoreResult<Self> {
        let Some(viewer) = viewer else {
            return Err(CoreError::AccessDenied("not signed in".to_string()));
        };
        let capability = AdminCapability::for_viewer(viewer)
            .ok_or_else(|| CoreError::AccessDenied(format!("{} is not an admin", viewer.name)))?;
        Ok(Self::new(ctx, capability))
    }

    // ===== Read side =====

    pub fn capability(&self) -> &AdminCapability {
        &self.capability
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn franchises(&self) -> &ListController<FranchiseSource> {
        &self.franchises
    }

    pub fn users(&self) -> &ListController<UserSource> {
        &self.users
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self.notice, Some(Notice::AccessDenied(_)))
    }

    // ===== Lifecycle =====

    /// Initial load for the default tab. Both controllers are synced
    /// concurrently; the inactive user tab issues nothing.
    pub async fn mount(&mut self) -> CoreResult<()> {
        let on_users = self.tabs.active() == Tab::Users;
        let franchise_ticket = self.franchises.apply_activation(!on_users, false);
        let user_ticket = self.users.apply_activation(on_users, false);

        let (franchises, users) = futures::future::join(
            self.franchises.run(franchise_ticket),
            self.users.run(user_ticket),
        )
        .await;

        let outcome = merge_outcomes(franchises, users);
        self.record(outcome)
    }

    /// Handle one operator action.
    pub async fn dispatch(&mut self, action: DashboardAction) -> CoreResult<()> {
        if let Some(Notice::AccessDenied(reason)) = &self.notice {
            return Err(CoreError::AccessDenied(reason.clone()));
        }
        log::debug!("Dashboard action: {action:?}");

        let outcome = match action {
            DashboardAction::SelectTab(tab) => self.select_tab(tab).await,
            DashboardAction::NextTab => {
                let change = self.tabs.next();
                self.activate(change).await
            }
            DashboardAction::NextPage => self.on_active_page(PageMove::Next).await,
            DashboardAction::PreviousPage => self.on_active_page(PageMove::Previous).await,
            DashboardAction::SetPage(page) => self.on_active_page(PageMove::To(page)).await,
            DashboardAction::SubmitFilter(raw) => match self.tabs.active() {
                Tab::Franchises => self.franchises.submit_filter(&raw).await.map(|_| ()),
                Tab::Users => self.users.submit_filter(&raw).await.map(|_| ()),
            },
            DashboardAction::Refresh => match self.tabs.active() {
                Tab::Franchises => self.franchises.refresh().await.map(|_| ()),
                Tab::Users => self.users.refresh().await.map(|_| ()),
            },
            DashboardAction::DeleteUser(user) => self.delete_user(&user).await.map(|_| ()),
            DashboardAction::CloseFranchise(franchise) => {
                self.close_franchise(&franchise).await.map(|_| ())
            }
            DashboardAction::CloseStore {
                franchise_id,
                store_id,
            } => self.close_store(&franchise_id, &store_id).await.map(|_| ()),
            DashboardAction::DismissNotice => {
                self.notice = None;
                return Ok(());
            }
        };
        self.record(outcome)
    }

    // ===== Mutation hook points =====

    /// Only valid while the Users tab is on screen.
    pub async fn delete_user(&mut self, user: &User) -> CoreResult<DeleteOutcome> {
        if self.tabs.active() != Tab::Users {
            return Err(CoreError::InactiveTab(Tab::Users.title().to_string()));
        }
        self.users.delete_row(user).await
    }

    /// Called once the close-franchise confirmation went through.
    pub async fn close_franchise(&mut self, franchise: &Franchise) -> CoreResult<DeleteOutcome> {
        self.franchises.delete_row(franchise).await
    }

    /// Called once the close-store confirmation went through.
    pub async fn close_store(
        &mut self,
        franchise_id: &str,
        store_id: &str,
    ) -> CoreResult<DeleteOutcome> {
        match self
            .franchises
            .source()
            .close_store(franchise_id, store_id)
            .await
        {
            Ok(()) => log::info!("Closed store {store_id} of franchise {franchise_id}"),
            Err(e) if e.is_not_found() => {
                log::warn!("Store {store_id} of franchise {franchise_id} was already closed");
            }
            Err(e) => return Err(e),
        }
        self.franchises.resync_after_mutation().await
    }

    // ===== Internals =====

    async fn select_tab(&mut self, tab: Tab) -> CoreResult<()> {
        let change = self.tabs.select(tab);
        self.activate(change).await
    }

    async fn activate(&mut self, change: TabChange) -> CoreResult<()> {
        if change.is_noop() {
            log::debug!("Tab {:?} re-selected", change.current);
        } else {
            log::debug!("Tab {:?} -> {:?}", change.previous, change.current);
        }
        match change.current {
            Tab::Users => {
                self.users.set_active(true, true).await?;
                self.franchises.set_active(false, false).await?;
            }
            Tab::Franchises => {
                self.users.set_active(false, false).await?;
                self.franchises.set_active(true, false).await?;
            }
        }
        Ok(())
    }

    async fn on_active_page(&mut self, step: PageMove) -> CoreResult<()> {
        match self.tabs.active() {
            Tab::Franchises => step.apply(&mut self.franchises).await,
            Tab::Users => step.apply(&mut self.users).await,
        }
    }

    fn record<T>(&mut self, outcome: CoreResult<T>) -> CoreResult<T> {
        match &outcome {
            Ok(_) => {
                if matches!(self.notice, Some(Notice::Banner(_))) {
                    self.notice = None;
                }
            }
            Err(e) => {
                self.notice = Some(match e.kind() {
                    ErrorKind::Unauthorized => {
                        log::warn!("Access denied: {e}");
                        Notice::AccessDenied(e.to_string())
                    }
                    ErrorKind::NotFound | ErrorKind::Transient => Notice::Banner(e.to_string()),
                });
            }
        }
        outcome
    }
}

/// Combine the two mount fetches, surfacing an authorization failure from
/// either side over any other error.
fn merge_outcomes(
    franchises: CoreResult<FetchOutcome>,
    users: CoreResult<FetchOutcome>,
) -> CoreResult<()> {
    match (franchises, users) {
        (Ok(_), Ok(_)) => Ok(()),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(first), Err(second)) => {
            if !first.is_unauthorized() && second.is_unauthorized() {
                log::debug!("Dropping {first} in favor of {second}");
                Err(second)
            } else {
                log::debug!("Dropping {second} in favor of {first}");
                Err(first)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PageMove {
    Next,
    Previous,
    To(u32),
}

impl PageMove {
    async fn apply<S>(self, ctl: &mut ListController<S>) -> CoreResult<()>
    where
        S: crate::traits::ListSource,
    {
        match self {
            Self::Next => ctl.next_page().await.map(|_| ()),
            Self::Previous => ctl.previous_page().await.map(|_| ()),
            Self::To(page) => ctl.set_page(page).await.map(|_| ()),
        }
    }
}
