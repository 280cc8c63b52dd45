use crate::adapters::{FileKeyValueStore, MemoryKeyValueStore};
use crate::config::StorageConfig;
use crate::core::local::LocalBackend;
use crate::core::remote::RemoteBackend;
use crate::core::{Contact, ContactBackend};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 不論設定哪種 backend，都用同一組 load/save 入口
pub struct ContactStorage {
    backend: Box<dyn ContactBackend>,
}

impl ContactStorage {
    pub fn new(backend: Box<dyn ContactBackend>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: StorageConfig) -> Result<Self> {
        config.validate()?;

        let backend: Box<dyn ContactBackend> = if config.use_remote {
            tracing::info!(
                "Using remote contact store at '{}'",
                config.remote_base_url.trim()
            );
            Box::new(RemoteBackend::new(
                config.remote_base_url.clone(),
                config.request_timeout(),
            )?)
        } else if let Some(dir) = &config.local_dir {
            tracing::info!("Using file contact store in '{}'", dir);
            Box::new(LocalBackend::new(
                FileKeyValueStore::new(dir),
                config.storage_key.clone(),
            ))
        } else {
            tracing::info!("Using in-memory contact store");
            Box::new(LocalBackend::new(
                MemoryKeyValueStore::new(),
                config.storage_key.clone(),
            ))
        };

        Ok(Self::new(backend))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub async fn load_contacts(&self) -> Result<Vec<Contact>> {
        self.backend.load().await
    }

    /// `None` 視為空清單
    pub async fn save_contacts(&self, contacts: Option<&[Contact]>) -> Result<bool> {
        self.backend.save(contacts.unwrap_or_default()).await
    }
}
