use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 不透明的聯絡人紀錄，儲存層只看 `id`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contact {
    pub data: Map<String, Value>,
}

impl Contact {
    pub fn id(&self) -> Option<&Value> {
        self.data.get("id")
    }

    /// 在以 id 為 key 的文件中使用的 key
    ///
    /// 字串 id 原樣使用，數字 id 轉成十進位字串；其他型別或缺少 id 則沒有 key
    pub fn id_key(&self) -> Option<String> {
        match self.id()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// JSON 值是物件時才包成聯絡人
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(data) => Some(Self { data }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_key_from_string_and_number() {
        let a = Contact::from_value(json!({"id": "a", "name": "Anna"})).unwrap();
        let n = Contact::from_value(json!({"id": 42})).unwrap();
        assert_eq!(a.id_key().as_deref(), Some("a"));
        assert_eq!(n.id_key().as_deref(), Some("42"));
    }

    #[test]
    fn test_id_key_missing_or_unusable() {
        let missing = Contact::from_value(json!({"name": "No Id"})).unwrap();
        let null_id = Contact::from_value(json!({"id": null})).unwrap();
        let nested = Contact::from_value(json!({"id": {"x": 1}})).unwrap();
        assert!(missing.id_key().is_none());
        assert!(null_id.id_key().is_none());
        assert!(nested.id_key().is_none());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let contact = Contact::from_value(json!({"id": "a", "v": 1})).unwrap();
        assert_eq!(serde_json::to_value(&contact).unwrap(), json!({"id": "a", "v": 1}));
        assert!(Contact::from_value(json!([1, 2])).is_none());
    }
}
