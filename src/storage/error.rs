#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Storage io error")]
    Io(#[from] std::io::Error),
    #[error("Malformed record")]
    Malformed(#[from] serde_json::Error),
}
