//! Pizza Admin Core Library
//!
//! Client-side logic of the pizza service admin console:
//! - Paginated, filterable list controllers for franchises and users
//! - Delete/close flows that keep the visible page consistent
//! - The tabbed dashboard composing both, gated on the admin role
//!
//! The remote side is abstracted behind [`traits::AdminApi`]; any front end
//! (the bundled CLI, or a test double) drives the dashboard through
//! [`services::DashboardAction`].

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ErrorKind};
pub use services::{AdminDashboard, DashboardAction, Notice, ServiceContext, Tab};
pub use traits::{AdminApi, ListSource, RemovableSource};
