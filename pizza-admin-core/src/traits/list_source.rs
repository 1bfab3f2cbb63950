//! List source abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Identified, ListQuery, ListResult, ResourceKind};

/// One remote collection a list controller pages through.
///
/// Implementations:
/// - `FranchiseSource` (`list_franchises` / `delete_franchise`)
/// - `UserSource` (`list_users` / `delete_user`)
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Row type rendered by the tab
    type Item: Identified + Clone + Send + Sync + 'static;

    /// Which collection this is; decides the page size.
    fn kind(&self) -> ResourceKind;

    /// Fetch one page
    ///
    /// # Arguments
    /// * `query` - page, page size and name pattern
    async fn fetch(&self, query: &ListQuery) -> CoreResult<ListResult<Self::Item>>;
}

/// A list source whose rows can be deleted by id.
#[async_trait]
pub trait RemovableSource: ListSource {
    /// Delete a row
    ///
    /// # Arguments
    /// * `id` - row identifier (see [`Identified::row_id`])
    async fn remove(&self, id: &str) -> CoreResult<()>;
}
