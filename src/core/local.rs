use crate::core::{Contact, ContactBackend, KeyValueStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// 整份清單以單一 JSON 陣列存在 `storage_key` 底下
pub struct LocalBackend<S: KeyValueStore> {
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> LocalBackend<S> {
    pub fn new(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    pub fn load_sync(&self) -> Result<Vec<Contact>> {
        let raw = match self.store.get(&self.storage_key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::debug!("No contacts stored under '{}'", self.storage_key);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Ok(contacts_from_local_value(value)),
            Err(e) => {
                tracing::warn!(
                    "Stored value under '{}' is not valid JSON, treating as empty: {}",
                    self.storage_key,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn save_sync(&self, contacts: &[Contact]) -> Result<()> {
        let raw = serde_json::to_string(contacts)?;
        self.store.set(&self.storage_key, &raw)?;
        tracing::debug!(
            "Saved {} contacts under '{}'",
            contacts.len(),
            self.storage_key
        );
        Ok(())
    }
}

/// 把解析後的本地資料轉成聯絡人清單，不是陣列就視為沒有資料
pub fn contacts_from_local_value(value: Value) -> Vec<Contact> {
    let Value::Array(items) = value else {
        tracing::warn!("Stored contacts are not a JSON array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            // `Contact` 一定是物件，非物件元素無法表示，刻意略過而非原樣回傳
            let contact = Contact::from_value(item);
            if contact.is_none() {
                tracing::warn!("Skipping stored entry {} that is not an object", index);
            }
            contact
        })
        .collect()
}

#[async_trait]
impl<S: KeyValueStore> ContactBackend for LocalBackend<S> {
    async fn load(&self) -> Result<Vec<Contact>> {
        self.load_sync()
    }

    async fn save(&self, contacts: &[Contact]) -> Result<bool> {
        self.save_sync(contacts)?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
