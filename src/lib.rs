pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FileKeyValueStore, MemoryKeyValueStore};
pub use config::{toml_config::TomlConfig, StorageConfig};
pub use crate::core::{local::LocalBackend, remote::RemoteBackend, storage::ContactStorage};
pub use domain::model::Contact;
pub use domain::ports::{ContactBackend, KeyValueStore};
pub use utils::error::{ContactStoreError, Result};
