#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}` from storage")]
    Read { key: String },
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
}
