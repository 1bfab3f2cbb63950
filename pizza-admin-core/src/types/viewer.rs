//! Viewer privilege

use super::{Role, User};

/// Proof that the viewer holds the admin role.
///
/// Can only be minted from a [`User`] carrying [`Role::Admin`]; the dashboard
/// takes one in its constructor instead of consulting session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCapability {
    viewer_name: String,
}

impl AdminCapability {
    pub fn for_viewer(viewer: &User) -> Option<Self> {
        viewer.has_role(Role::Admin).then(|| Self {
            viewer_name: viewer.name.clone(),
        })
    }

    pub fn viewer_name(&self) -> &str {
        &self.viewer_name
    }
}
