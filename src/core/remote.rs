use crate::core::{Contact, ContactBackend};
use crate::utils::error::{ContactStoreError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

pub const CONTACTS_RESOURCE: &str = "contacts.json";

/// 以單一 id 為 key 的 JSON 文件讀寫整份聯絡人清單
pub struct RemoteBackend {
    client: Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn contacts_url(&self) -> String {
        build_remote_url(&self.base_url, CONTACTS_RESOURCE)
    }
}

/// 將 `path` 接在 `base_url` 後面，中間只補一個 `/`；
/// base 為空白時直接回傳相對路徑 `path`
pub fn build_remote_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim();
    if base.is_empty() {
        return path.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// 以聯絡人 id 為 key 建立 payload，重複的 id 由後者覆蓋
pub fn build_remote_payload(contacts: &[Contact]) -> Result<Map<String, Value>> {
    let mut payload = Map::new();
    for (index, contact) in contacts.iter().enumerate() {
        let key = contact
            .id_key()
            .ok_or(ContactStoreError::MissingContactId { index })?;
        payload.insert(key, Value::Object(contact.data.clone()));
    }
    Ok(payload)
}

/// 取出遠端文件的值作為清單，key 丟棄
pub fn contacts_from_remote_document(document: Value) -> Vec<Contact> {
    let entries: Vec<Value> = match document {
        Value::Null => return Vec::new(),
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        // Firebase 對小整數 key 的文件會回傳（稀疏）陣列
        Value::Array(items) => items,
        other => {
            tracing::warn!("Remote document is not an object: {}", other);
            return Vec::new();
        }
    };

    entries.into_iter().filter_map(Contact::from_value).collect()
}

#[async_trait]
impl ContactBackend for RemoteBackend {
    async fn load(&self) -> Result<Vec<Contact>> {
        let url = self.contacts_url();
        tracing::debug!("Fetching contacts from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Remote load response status: {}", status);

        // 不檢查狀態碼，錯誤回應的 body 照樣解析
        if !status.is_success() {
            tracing::warn!("Remote store answered contacts read with status {}", status);
        }

        // 空 body 不是合法 JSON，解析錯誤直接往上拋
        let body = response.text().await?;
        let document: Value = serde_json::from_str(&body)?;
        let contacts = contacts_from_remote_document(document);
        tracing::debug!("Loaded {} contacts from remote store", contacts.len());
        Ok(contacts)
    }

    async fn save(&self, contacts: &[Contact]) -> Result<bool> {
        let payload = build_remote_payload(contacts)?;
        let url = self.contacts_url();
        tracing::debug!("Writing {} contacts to: {}", payload.len(), url);

        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&payload)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Remote store rejected contacts write with status {}", status);
        }
        Ok(status.is_success())
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact(value: Value) -> Contact {
        Contact::from_value(value).unwrap()
    }

    #[test]
    fn test_build_remote_url() {
        assert_eq!(
            build_remote_url("https://x.example/db", CONTACTS_RESOURCE),
            "https://x.example/db/contacts.json"
        );
        assert_eq!(
            build_remote_url("https://x.example/db/", CONTACTS_RESOURCE),
            "https://x.example/db/contacts.json"
        );
        assert_eq!(build_remote_url("", CONTACTS_RESOURCE), "contacts.json");
        assert_eq!(build_remote_url("   ", CONTACTS_RESOURCE), "contacts.json");
        assert_eq!(
            build_remote_url("  https://x.example/db  ", CONTACTS_RESOURCE),
            "https://x.example/db/contacts.json"
        );
    }

    #[test]
    fn test_build_remote_url_does_not_collapse_extra_slashes() {
        assert_eq!(
            build_remote_url("https://x.example/db//", CONTACTS_RESOURCE),
            "https://x.example/db//contacts.json"
        );
    }

    #[test]
    fn test_payload_keyed_by_id() {
        let contacts = vec![
            contact(json!({"id": "a", "v": 1})),
            contact(json!({"id": "b", "v": 2})),
        ];
        let payload = build_remote_payload(&contacts).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"a": {"id": "a", "v": 1}, "b": {"id": "b", "v": 2}})
        );
    }

    #[test]
    fn test_payload_last_duplicate_wins() {
        let contacts = vec![
            contact(json!({"id": "a", "v": 1})),
            contact(json!({"id": "a", "v": 2})),
        ];
        let payload = build_remote_payload(&contacts).unwrap();
        assert_eq!(Value::Object(payload), json!({"a": {"id": "a", "v": 2}}));
    }

    #[test]
    fn test_payload_rejects_missing_id() {
        let contacts = vec![contact(json!({"id": 7})), contact(json!({"name": "x"}))];
        let err = build_remote_payload(&contacts).unwrap_err();
        assert!(matches!(err, ContactStoreError::MissingContactId { index: 1 }));
    }

    #[test]
    fn test_empty_payload_is_empty_object() {
        let payload = build_remote_payload(&[]).unwrap();
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn test_document_values_become_contacts() {
        let contacts = contacts_from_remote_document(json!({
            "a": {"id": "a", "v": 1},
            "b": {"id": "b", "v": 2}
        }));
        assert_eq!(contacts.len(), 2);
        assert!(contacts.contains(&contact(json!({"id": "a", "v": 1}))));
        assert!(contacts.contains(&contact(json!({"id": "b", "v": 2}))));
    }

    #[test]
    fn test_null_or_scalar_document_is_empty() {
        assert!(contacts_from_remote_document(Value::Null).is_empty());
        assert!(contacts_from_remote_document(json!("text")).is_empty());
        assert!(contacts_from_remote_document(json!(12)).is_empty());
    }

    #[test]
    fn test_sparse_array_document_skips_holes() {
        let contacts = contacts_from_remote_document(json!([null, {"id": 1}, null, {"id": 3}]));
        assert_eq!(contacts, vec![contact(json!({"id": 1})), contact(json!({"id": 3}))]);
    }
}
