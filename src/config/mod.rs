#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_key, validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "joinContacts";

/// 啟動時建立一次，交給 `ContactStorage::from_config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub use_remote: bool,
    pub remote_base_url: String,
    pub storage_key: String,
    /// 檔案型本地 store 的目錄，未設定時使用記憶體
    pub local_dir: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            use_remote: false,
            remote_base_url: String::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            local_dir: None,
            request_timeout_seconds: None,
        }
    }
}

impl StorageConfig {
    pub fn local_dir(dir: impl Into<String>) -> Self {
        Self {
            local_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            use_remote: true,
            remote_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.local_dir.is_some() {
            validate_file_key("storage.storage_key", &self.storage_key)?;
        } else {
            validate_non_empty_string("storage.storage_key", &self.storage_key)?;
        }

        // 空的 base URL 代表相對路徑，允許
        let base = self.remote_base_url.trim();
        if self.use_remote && !base.is_empty() {
            validate_url("storage.remote_base_url", base)?;
        }

        if let Some(dir) = &self.local_dir {
            validate_non_empty_string("storage.local_dir", dir)?;
        }

        if let Some(timeout) = self.request_timeout_seconds {
            validate_positive_number("storage.request_timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
