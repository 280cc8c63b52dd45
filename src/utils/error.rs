use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactStoreError {
    #[error("Remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Contact at position {index} has no usable id")]
    MissingContactId { index: usize },
}

impl ContactStoreError {
    /// 給使用者看的簡短訊息，不含底層錯誤鏈
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactStoreError::Http(e) if e.is_timeout() => {
                "The remote contact store did not answer in time".to_string()
            }
            ContactStoreError::Http(e) if e.is_builder() => {
                "The remote contact store URL could not be used".to_string()
            }
            ContactStoreError::Http(_) => "Could not reach the remote contact store".to_string(),
            ContactStoreError::Io(_) => "Could not access the local contact store".to_string(),
            ContactStoreError::Serialization(_) => "Contact data is not valid JSON".to_string(),
            ContactStoreError::ConfigError { .. }
            | ContactStoreError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            ContactStoreError::MissingContactId { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactStoreError::Http(_) => {
                "Check the remote base URL and your network connection"
            }
            ContactStoreError::Io(_) => "Check that the data directory exists and is writable",
            ContactStoreError::Serialization(_) => "Make sure the input is a JSON array of objects",
            ContactStoreError::ConfigError { .. }
            | ContactStoreError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            ContactStoreError::MissingContactId { .. } => {
                "Give every contact a string or numeric \"id\" field"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactStoreError>;
