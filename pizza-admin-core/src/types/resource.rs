//! Resource kinds managed by the console

use serde::{Deserialize, Serialize};

use super::{Franchise, User};

/// The collections the admin console lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Franchise,
    User,
}

impl ResourceKind {
    /// Rows per page; fixed per kind.
    pub const fn page_size(self) -> u32 {
        match self {
            Self::Franchise => 3,
            Self::User => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Franchise => "franchise",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A row the console can address for deletion.
pub trait Identified {
    /// `None` for rows that cannot be deleted (no identifier yet).
    fn row_id(&self) -> Option<&str>;
}

impl Identified for User {
    fn row_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl Identified for Franchise {
    fn row_id(&self) -> Option<&str> {
        Some(self.id.as_str()).filter(|id| !id.is_empty())
    }
}
