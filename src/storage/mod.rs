use anyhow::Result;
use async_trait::async_trait;

pub mod dropbox;

/// Outcome of a folder-create call. An existing folder is reported, not
/// raised; the caller decides what a conflict means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderCreate {
    Created,
    AlreadyExists,
}

/// Remote storage used by the upload flow. One attempt per call; timeouts
/// and concurrency limits are the implementation's concern.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create the folder at `path` if absent.
    async fn create_folder(&self, path: &str) -> Result<FolderCreate>;

    /// Write `bytes` at `path`, fully replacing any existing file.
    async fn write_file(&self, path: &str, bytes: Vec<u8>) -> Result<()>;

    /// Create a shared link for `path` and return its URL.
    async fn create_shared_link(&self, path: &str) -> Result<String>;
}
