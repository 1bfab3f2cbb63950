//! `ListSource` adapters over the admin API

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::{AdminApi, ListSource, RemovableSource};
use crate::types::{Franchise, ListQuery, ListResult, ResourceKind, User};

/// Franchises (with their stores)
pub struct FranchiseSource {
    api: Arc<dyn AdminApi>,
}

impl FranchiseSource {
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    /// Close a single store; the franchise row stays.
    pub async fn close_store(&self, franchise_id: &str, store_id: &str) -> CoreResult<()> {
        self.api.delete_store(franchise_id, store_id).await?;
        Ok(())
    }
}

#[async_trait]
impl ListSource for FranchiseSource {
    type Item = Franchise;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Franchise
    }

    async fn fetch(&self, query: &ListQuery) -> CoreResult<ListResult<Franchise>> {
        Ok(self.api.list_franchises(query).await?)
    }
}

#[async_trait]
impl RemovableSource for FranchiseSource {
    async fn remove(&self, id: &str) -> CoreResult<()> {
        self.api.delete_franchise(id).await?;
        Ok(())
    }
}

/// User accounts
pub struct UserSource {
    api: Arc<dyn AdminApi>,
}

impl UserSource {
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for UserSource {
    type Item = User;

    fn kind(&self) -> ResourceKind {
        ResourceKind::User
    }

    async fn fetch(&self, query: &ListQuery) -> CoreResult<ListResult<User>> {
        Ok(self.api.list_users(query).await?)
    }
}

#[async_trait]
impl RemovableSource for UserSource {
    async fn remove(&self, id: &str) -> CoreResult<()> {
        self.api.delete_user(id).await?;
        Ok(())
    }
}
