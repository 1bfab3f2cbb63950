//! Data-source abstraction trait definition

mod list_source;

pub use list_source::{ListSource, RemovableSource};

// Re-export the remote data-access trait
pub use pizza_admin_client::AdminApi;
