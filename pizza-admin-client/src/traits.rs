use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Franchise, ListQuery, ListResult, User};

/// Remote data-access operations the admin console relies on.
///
/// Implementations own transport concerns (timeouts, auth headers).
/// None of the operations retry.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// The signed-in viewer, used to decide whether the console may be shown.
    async fn current_user(&self) -> Result<User>;

    /// One page of franchises whose name matches `query.pattern`.
    async fn list_franchises(&self, query: &ListQuery) -> Result<ListResult<Franchise>>;

    /// One page of users whose name matches `query.pattern`.
    async fn list_users(&self, query: &ListQuery) -> Result<ListResult<User>>;

    /// Delete a user account.
    ///
    /// # Errors
    /// * `NotFound` if the id does not exist
    /// * `Unauthorized` if the caller lacks the admin role
    async fn delete_user(&self, user_id: &str) -> Result<()>;

    /// Close a franchise together with all of its stores.
    async fn delete_franchise(&self, franchise_id: &str) -> Result<()>;

    /// Close one store of a franchise.
    async fn delete_store(&self, franchise_id: &str, store_id: &str) -> Result<()>;
}
