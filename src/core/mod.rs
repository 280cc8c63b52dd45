pub mod local;
pub mod remote;
pub mod storage;

pub use crate::domain::model::Contact;
pub use crate::domain::ports::{ContactBackend, KeyValueStore};
pub use crate::utils::error::Result;
