//! `AdminApi` Trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::AdminApi;
use crate::types::{
    Franchise, FranchiseListResponse, ListQuery, ListResult, User, UserListResponse,
};

use super::http::segment;
use super::HttpAdminApi;

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn current_user(&self) -> Result<User> {
        self.get("user/me").await
    }

    async fn list_franchises(&self, query: &ListQuery) -> Result<ListResult<Franchise>> {
        let resp: FranchiseListResponse = self.get_list("franchise", query).await?;
        Ok(resp.into())
    }

    async fn list_users(&self, query: &ListQuery) -> Result<ListResult<User>> {
        let resp: UserListResponse = self.get_list("user", query).await?;
        Ok(resp.into())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.delete(&format!("user/{}", segment(user_id))).await
    }

    async fn delete_franchise(&self, franchise_id: &str) -> Result<()> {
        self.delete(&format!("franchise/{}", segment(franchise_id)))
            .await
    }

    async fn delete_store(&self, franchise_id: &str, store_id: &str) -> Result<()> {
        self.delete(&format!(
            "franchise/{}/store/{}",
            segment(franchise_id),
            segment(store_id)
        ))
        .await
    }
}
