use crate::config::toml_config::TomlConfig;
use crate::config::StorageConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-storage")]
#[command(about = "Load and save a contact list in a local or remote store")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with a [storage] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Use the remote JSON document store")]
    pub remote: bool,

    #[arg(long)]
    pub remote_base_url: Option<String>,

    #[arg(long)]
    pub storage_key: Option<String>,

    #[arg(long, help = "Directory for the local store (default ./data)")]
    pub data_dir: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the stored contacts as a JSON array
    Load,
    /// Replace the stored contacts with a JSON array read from FILE ("-" for stdin)
    Save { file: String },
    /// Store an empty contact list
    Clear,
}

pub const DEFAULT_DATA_DIR: &str = "./data";

impl CliConfig {
    /// 先讀設定檔，再以命令列參數覆蓋
    pub fn storage_config(&self) -> Result<StorageConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_storage_config(),
            None => StorageConfig::default(),
        };

        if self.remote {
            config.use_remote = true;
        }
        if let Some(url) = &self.remote_base_url {
            config.remote_base_url = url.clone();
        }
        if let Some(key) = &self.storage_key {
            config.storage_key = key.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.local_dir = Some(dir.clone());
        }
        if config.local_dir.is_none() {
            // 行程結束後記憶體資料就消失，CLI 一律落地到檔案
            config.local_dir = Some(DEFAULT_DATA_DIR.to_string());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.request_timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_use_data_dir() {
        let cli = CliConfig::try_parse_from(["contact-storage", "load"]).unwrap();
        let config = cli.storage_config().unwrap();

        assert!(!config.use_remote);
        assert_eq!(config.local_dir.as_deref(), Some(DEFAULT_DATA_DIR));
        assert_eq!(config.storage_key, "joinContacts");
        assert!(matches!(cli.command, Command::Load));
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[storage]\nremote_base_url = \"https://file.example\"\nstorage_key = \"fileKey\"\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "contact-storage",
            "--config",
            &path,
            "--remote",
            "--remote-base-url",
            "https://flag.example/db",
            "--timeout-seconds",
            "5",
            "save",
            "contacts.json",
        ])
        .unwrap();
        let config = cli.storage_config().unwrap();

        assert!(config.use_remote);
        assert_eq!(config.remote_base_url, "https://flag.example/db");
        assert_eq!(config.storage_key, "fileKey");
        assert_eq!(config.request_timeout_seconds, Some(5));
        assert!(matches!(cli.command, Command::Save { ref file } if file == "contacts.json"));
    }
}
