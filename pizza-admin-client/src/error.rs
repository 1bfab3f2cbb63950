use serde::{Deserialize, Serialize};

/// Unified error type for all admin API operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent failures that may succeed if the operator
/// tries again later. The client never retries on its own:
/// - [`Network`](Self::Network): connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`Http`](Self::Http): unexpected non-success status
/// - [`Parse`](Self::Parse): body did not match the expected shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The viewer is not signed in or lacks the admin role (HTTP 401/403).
    Unauthorized {
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The addressed resource does not exist (HTTP 404).
    NotFound {
        /// Resource path that was not found, e.g. `user/7`.
        resource: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service answered with a status the client does not map.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated for logging elsewhere).
        body: String,
    },

    /// Failed to parse the response body.
    Parse {
        /// Parse error details.
        detail: String,
    },

    /// The client could not be built from its configuration.
    InvalidConfig {
        /// What is wrong with the configuration.
        detail: String,
    },
}

impl ClientError {
    /// Whether it is expected behavior (missing privilege, vanished resource), used for log levels.
    ///
    /// `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::NotFound { .. })
    }

    /// Whether the failure is worth surfacing as "try again".
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::Http { .. } | Self::Parse { .. }
        )
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "'{resource}' not found: {msg}")
                } else {
                    write!(f, "'{resource}' not found")
                }
            }
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Http { status, .. } => write!(f, "Unexpected HTTP status {status}"),
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Result type alias for admin API operations.
pub type Result<T> = std::result::Result<T, ClientError>;
