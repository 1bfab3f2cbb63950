//! 配置加载
//!
//! `config.json` under the platform config directory, then environment
//! overrides on top.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use pizza_admin_client::ClientConfig;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "pizza-admin";
const CONFIG_FILE: &str = "config.json";

pub const ENV_CONFIG_PATH: &str = "PIZZA_ADMIN_CONFIG";
pub const ENV_URL: &str = "PIZZA_ADMIN_URL";
pub const ENV_TOKEN: &str = "PIZZA_ADMIN_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "PIZZA_ADMIN_TIMEOUT_SECS";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    /// Connection settings handed to the HTTP client
    #[serde(flatten)]
    pub client: ClientConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// `$PIZZA_ADMIN_CONFIG`, else `<config_dir>/pizza-admin/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CONFIG_PATH) {
            return Ok(PathBuf::from(path));
        }
        let root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {ENV_CONFIG_PATH} to the config file")
        })?;
        Ok(root.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse config file {}", path.display()))
    }

    /// Apply `PIZZA_ADMIN_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.client.base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            let token = token.trim().to_string();
            self.client.auth_token = (!token.is_empty()).then_some(token);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))?;
            self.client.request_timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    /// File at the default path plus process environment.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        let mut config = Self::load(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }
}
