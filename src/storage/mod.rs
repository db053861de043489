pub mod error;
pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use error::StorageError;

pub trait Storage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}
