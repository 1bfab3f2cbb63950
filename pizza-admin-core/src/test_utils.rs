//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use pizza_admin_client::Result;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::services::ServiceContext;
use crate::traits::AdminApi;
use crate::types::{
    Franchise, FranchiseAdmin, ListQuery, ListResult, Role, RoleAssignment, Store, User,
};

// ===== MockAdminApi =====

/// In-memory admin API with the server's filter and paging rules.
pub struct MockAdminApi {
    current_user: RwLock<Option<User>>,
    franchises: RwLock<Vec<Franchise>>,
    users: RwLock<Vec<User>>,
    franchise_list_calls: RwLock<usize>,
    user_list_calls: RwLock<usize>,
    /// (list calls that still succeed, error returned afterwards)
    list_failure: RwLock<Option<(usize, ClientError)>>,
    delete_failure: RwLock<Option<ClientError>>,
    deleted_users: RwLock<Vec<String>>,
    deleted_franchises: RwLock<Vec<String>>,
    deleted_stores: RwLock<Vec<(String, String)>>,
}

impl MockAdminApi {
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    pub fn with_data(franchises: Vec<Franchise>, users: Vec<User>) -> Self {
        Self {
            current_user: RwLock::new(None),
            franchises: RwLock::new(franchises),
            users: RwLock::new(users),
            franchise_list_calls: RwLock::new(0),
            user_list_calls: RwLock::new(0),
            list_failure: RwLock::new(None),
            delete_failure: RwLock::new(None),
            deleted_users: RwLock::new(Vec::new()),
            deleted_franchises: RwLock::new(Vec::new()),
            deleted_stores: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_current_user(&self, user: Option<User>) {
        *self.current_user.write().await = user;
    }

    /// The next list call (of either kind) fails with `err`.
    pub async fn fail_next_list(&self, err: ClientError) {
        self.fail_list_after(0, err).await;
    }

    /// `successes` more list calls go through, the one after fails with `err`.
    pub async fn fail_list_after(&self, successes: usize, err: ClientError) {
        *self.list_failure.write().await = Some((successes, err));
    }

    pub async fn fail_next_delete(&self, err: ClientError) {
        *self.delete_failure.write().await = Some(err);
    }

    pub async fn franchise_list_calls(&self) -> usize {
        *self.franchise_list_calls.read().await
    }

    pub async fn user_list_calls(&self) -> usize {
        *self.user_list_calls.read().await
    }

    pub async fn list_calls(&self) -> usize {
        self.franchise_list_calls().await + self.user_list_calls().await
    }

    pub async fn deleted_users(&self) -> Vec<String> {
        self.deleted_users.read().await.clone()
    }

    pub async fn deleted_franchises(&self) -> Vec<String> {
        self.deleted_franchises.read().await.clone()
    }

    pub async fn deleted_stores(&self) -> Vec<(String, String)> {
        self.deleted_stores.read().await.clone()
    }

    async fn take_list_failure(&self) -> Option<ClientError> {
        let mut slot = self.list_failure.write().await;
        match slot.as_mut() {
            Some((0, _)) => slot.take().map(|(_, err)| err),
            Some((remaining, _)) => {
                *remaining -= 1;
                None
            }
            None => None,
        }
    }

    async fn take_delete_failure(&self) -> Option<ClientError> {
        self.delete_failure.write().await.take()
    }
}

fn matches(query: &ListQuery, name: &str) -> bool {
    query
        .pattern
        .needle()
        .is_none_or(|needle| name.to_lowercase().contains(&needle.to_lowercase()))
}

fn paginate<T: Clone>(rows: &[T], query: &ListQuery) -> ListResult<T> {
    let limit = query.page_size as usize;
    let start = (query.page as usize * limit).min(rows.len());
    let end = (start + limit).min(rows.len());
    ListResult::new(rows[start..end].to_vec(), end < rows.len())
}

fn not_found(resource: String) -> ClientError {
    ClientError::NotFound {
        resource,
        raw_message: Some("not found".to_string()),
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn current_user(&self) -> Result<User> {
        self.current_user
            .read()
            .await
            .clone()
            .ok_or(ClientError::Unauthorized {
                raw_message: Some("unauthorized".to_string()),
            })
    }

    async fn list_franchises(&self, query: &ListQuery) -> Result<ListResult<Franchise>> {
        *self.franchise_list_calls.write().await += 1;
        if let Some(err) = self.take_list_failure().await {
            return Err(err);
        }
        let rows: Vec<Franchise> = self
            .franchises
            .read()
            .await
            .iter()
            .filter(|f| matches(query, &f.name))
            .cloned()
            .collect();
        Ok(paginate(&rows, query))
    }

    async fn list_users(&self, query: &ListQuery) -> Result<ListResult<User>> {
        *self.user_list_calls.write().await += 1;
        if let Some(err) = self.take_list_failure().await {
            return Err(err);
        }
        let rows: Vec<User> = self
            .users
            .read()
            .await
            .iter()
            .filter(|u| matches(query, &u.name))
            .cloned()
            .collect();
        Ok(paginate(&rows, query))
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        if let Some(err) = self.take_delete_failure().await {
            return Err(err);
        }
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id.as_deref() != Some(user_id));
        if users.len() == before {
            return Err(not_found(format!("user/{user_id}")));
        }
        self.deleted_users.write().await.push(user_id.to_string());
        Ok(())
    }

    async fn delete_franchise(&self, franchise_id: &str) -> Result<()> {
        if let Some(err) = self.take_delete_failure().await {
            return Err(err);
        }
        let mut franchises = self.franchises.write().await;
        let before = franchises.len();
        franchises.retain(|f| f.id != franchise_id);
        if franchises.len() == before {
            return Err(not_found(format!("franchise/{franchise_id}")));
        }
        self.deleted_franchises
            .write()
            .await
            .push(franchise_id.to_string());
        Ok(())
    }

    async fn delete_store(&self, franchise_id: &str, store_id: &str) -> Result<()> {
        if let Some(err) = self.take_delete_failure().await {
            return Err(err);
        }
        let resource = format!("franchise/{franchise_id}/store/{store_id}");
        let mut franchises = self.franchises.write().await;
        let franchise = franchises
            .iter_mut()
            .find(|f| f.id == franchise_id)
            .ok_or_else(|| not_found(resource.clone()))?;
        let before = franchise.stores.len();
        franchise.stores.retain(|s| s.id != store_id);
        if franchise.stores.len() == before {
            return Err(not_found(resource));
        }
        self.deleted_stores
            .write()
            .await
            .push((franchise_id.to_string(), store_id.to_string()));
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`，viewer 为 admin
pub fn create_test_context(
    franchises: Vec<Franchise>,
    users: Vec<User>,
) -> (Arc<ServiceContext>, Arc<MockAdminApi>) {
    let api = Arc::new(MockAdminApi::with_data(franchises, users));
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}

fn user_with(id: &str, name: &str, roles: &[Role]) -> User {
    User {
        id: Some(id.to_string()),
        name: name.to_string(),
        email: format!("{}@jwt.com", name.to_lowercase().replace(' ', ".")),
        roles: roles
            .iter()
            .map(|role| RoleAssignment {
                role: *role,
                object_id: None,
            })
            .collect(),
    }
}

pub fn admin_user() -> User {
    user_with("a-1", "pizza admin", &[Role::Admin])
}

pub fn diner_user() -> User {
    user_with("d-1", "pizza diner", &[Role::Diner])
}

/// A diner with an id derived from `name`.
pub fn user_named(name: &str) -> User {
    let id = format!("u-{}", name.to_lowercase().replace(' ', "-"));
    user_with(&id, name, &[Role::Diner])
}

/// `count` diners named `user 1` .. `user {count}` with ids `1` .. `{count}`.
pub fn sample_users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|i| user_with(&i.to_string(), &format!("user {i}"), &[Role::Diner]))
        .collect()
}

fn store(id: &str, name: &str, total_revenue: f64) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        total_revenue,
    }
}

fn franchise(id: &str, name: &str, admins: Vec<FranchiseAdmin>, stores: Vec<Store>) -> Franchise {
    Franchise {
        id: id.to_string(),
        name: name.to_string(),
        admins,
        stores,
    }
}

/// Four franchises; only the first matches `pizza`.
pub fn sample_franchises() -> Vec<Franchise> {
    let franchisee = FranchiseAdmin {
        id: "3".to_string(),
        name: "pizza franchisee".to_string(),
        email: "f@jwt.com".to_string(),
    };
    vec![
        franchise(
            "1",
            "pizzaPocket",
            vec![franchisee],
            vec![
                store("1", "SLC", 0.0215),
                store("2", "Test Store", 0.0),
                store("3", "Leo", 0.004),
                store("4", "Leo", 0.0),
            ],
        ),
        franchise("2", "test", Vec::new(), Vec::new()),
        franchise("3", "Test Franchise", Vec::new(), Vec::new()),
        franchise(
            "4",
            "Test Franchise jljypaqx0o",
            Vec::new(),
            vec![store("5", "Test Store 123", 0.0)],
        ),
    ]
}
