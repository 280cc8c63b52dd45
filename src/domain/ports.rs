use crate::domain::model::Contact;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 本地 backend 使用的同步字串 key/value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// 整份聯絡人清單的一種儲存媒介
#[async_trait]
pub trait ContactBackend: Send + Sync {
    async fn load(&self) -> Result<Vec<Contact>>;

    /// 取代已儲存的清單，`Ok(false)` 代表 store 拒絕寫入
    async fn save(&self, contacts: &[Contact]) -> Result<bool>;

    fn name(&self) -> &'static str;
}
