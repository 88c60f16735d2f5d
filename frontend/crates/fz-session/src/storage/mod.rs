pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result, StorageError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Key holding the raw credential token
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized identity record (JSON)
pub const USER_KEY: &str = "user";

/// Durable key/value storage for session state.
///
/// Mirrors browser local storage: string keys, string values, missing keys
/// read as `None`, removing a missing key is not an error.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
