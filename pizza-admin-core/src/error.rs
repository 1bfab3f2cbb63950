//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use pizza_admin_client::ClientError;

/// How the enclosing screen should react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Viewer lost (or never had) the admin privilege: full-screen access denied.
    Unauthorized,
    /// The target of a mutation vanished.
    NotFound,
    /// Anything else: inline banner, previous rows stay visible.
    Transient,
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The viewer may not open the admin console
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The action targets a tab that is not on screen
    #[error("The {0} tab is not active")]
    InactiveTab(String),

    /// Admin API error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AccessDenied(_) | Self::Client(ClientError::Unauthorized { .. }) => {
                ErrorKind::Unauthorized
            }
            Self::Client(e) if e.is_transient() => ErrorKind::Transient,
            Self::Client(ClientError::NotFound { .. }) => ErrorKind::NotFound,
            Self::InactiveTab(_) | Self::Client(_) => ErrorKind::Transient,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Whether it is expected behavior (missing privilege, vanished row), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AccessDenied(_) | Self::InactiveTab(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
