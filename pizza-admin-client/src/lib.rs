//! # pizza-admin-client
//!
//! Data-access layer for the pizza service admin console.
//!
//! The [`AdminApi`] trait is what the console's list controllers depend on;
//! [`HttpAdminApi`] implements it over the service's REST endpoints.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pizza_admin_client::{AdminApi, ClientConfig, HttpAdminApi, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpAdminApi::new(ClientConfig {
//!         base_url: "http://localhost:3000".to_string(),
//!         auth_token: Some("admin-token".to_string()),
//!         ..ClientConfig::default()
//!     })?;
//!
//!     let page = api.list_franchises(&ListQuery::first_page(3)).await?;
//!     for franchise in &page.items {
//!         println!("{} ({} stores)", franchise.name, franchise.stores.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ClientError`]. 401/403 map to `Unauthorized`,
//! 404 to `NotFound`, everything else is transient (see
//! [`ClientError::is_transient`]). Nothing is retried automatically.

mod error;
mod http_api;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{ClientError, Result};
pub use http_api::{ClientConfig, HttpAdminApi};
pub use traits::AdminApi;
pub use types::{
    Franchise, FranchiseAdmin, ListQuery, ListResult, NamePattern, Role, RoleAssignment, Store,
    User,
};
pub use utils::log_sanitizer::{mask_token, truncate_for_log};
