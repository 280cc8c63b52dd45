// Adapters layer: concrete key/value stores behind `KeyValueStore`.

pub mod kv;

pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
