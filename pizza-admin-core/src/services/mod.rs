//! 业务逻辑服务层

mod dashboard;
mod fetch_trigger;
mod list_controller;
mod sources;
mod tab_selector;

pub use dashboard::{AdminDashboard, DashboardAction, Notice};
pub use fetch_trigger::{FetchInputs, FetchTicket, FetchTrigger, TabGate};
pub use list_controller::{DeleteOutcome, FetchOutcome, ListController};
pub use sources::{FranchiseSource, UserSource};
pub use tab_selector::{Tab, TabChange, TabSelector};

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::AdminApi;
use crate::types::{AdminCapability, User};

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文并注入 admin API 实现（HTTP 客户端或测试 mock）。
pub struct ServiceContext {
    /// Remote admin API
    pub api: Arc<dyn AdminApi>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn franchise_source(&self) -> FranchiseSource {
        FranchiseSource::new(Arc::clone(&self.api))
    }

    #[must_use]
    pub fn user_source(&self) -> UserSource {
        UserSource::new(Arc::clone(&self.api))
    }

    /// 获取当前登录用户
    pub async fn current_user(&self) -> CoreResult<User> {
        Ok(self.api.current_user().await?)
    }

    /// Resolve the signed-in user and check the admin role.
    pub async fn admin_capability(&self) -> CoreResult<AdminCapability> {
        let viewer = self.current_user().await?;
        AdminCapability::for_viewer(&viewer).ok_or_else(|| {
            log::warn!("{} tried to open the admin console without the admin role", viewer.name);
            CoreError::AccessDenied(format!("{} is not an admin", viewer.name))
        })
    }

    /// Check the viewer and build a dashboard, without loading anything yet.
    pub async fn open_dashboard(&self) -> CoreResult<AdminDashboard> {
        let capability = self.admin_capability().await?;
        Ok(AdminDashboard::new(self, capability))
    }
}
