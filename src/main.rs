use anyhow::Context;
use clap::Parser;
use contact_storage::config::cli::Command;
use contact_storage::utils::logger;
use contact_storage::{CliConfig, Contact, ContactStorage, ContactStoreError};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let storage = match cli.storage_config().and_then(ContactStorage::from_config) {
        Ok(storage) => storage,
        Err(e) => exit_with(&e),
    };

    match cli.command {
        Command::Load => match storage.load_contacts().await {
            Ok(contacts) => {
                tracing::info!("Loaded {} contacts", contacts.len());
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            }
            Err(e) => exit_with(&e),
        },
        Command::Save { file } => {
            let contacts = read_contacts(&file)?;
            save_or_exit(&storage, Some(&contacts)).await;
            println!("✅ Saved {} contacts", contacts.len());
        }
        Command::Clear => {
            save_or_exit(&storage, None).await;
            println!("✅ Contact list cleared");
        }
    }

    Ok(())
}

fn read_contacts(file: &str) -> anyhow::Result<Vec<Contact>> {
    let raw = if file == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading contacts from stdin")?;
        raw
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading contacts from {}", file))?
    };

    serde_json::from_str(&raw).with_context(|| format!("{} is not a JSON array of objects", file))
}

async fn save_or_exit(storage: &ContactStorage, contacts: Option<&[Contact]>) {
    match storage.save_contacts(contacts).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::error!("❌ The {} store refused the write", storage.backend_name());
            eprintln!("❌ The contact store refused the write");
            std::process::exit(2);
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &ContactStoreError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
