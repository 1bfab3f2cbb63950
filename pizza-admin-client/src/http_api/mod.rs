//! Admin API over the pizza service REST endpoints

mod api;
mod http;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::mask_token;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpAdminApi`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:3000`. A trailing slash is ignored.
    pub base_url: String,
    /// Bearer token of the signed-in admin.
    pub auth_token: Option<String>,
    #[serde(with = "secs")]
    pub connect_timeout: Duration,
    #[serde(with = "secs")]
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            auth_token: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// [`AdminApi`](crate::AdminApi) implementation backed by `reqwest`.
pub struct HttpAdminApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) auth_token: Option<String>,
}

impl HttpAdminApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig {
                detail: format!("base URL must start with http:// or https://, got '{base_url}'"),
            });
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: e.to_string(),
            })?;

        log::debug!(
            "Admin API client for {base_url} (token: {})",
            config
                .auth_token
                .as_deref()
                .map_or_else(|| "none".to_string(), mask_token)
        );

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
