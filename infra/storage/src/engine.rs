//! The [`Storage`] handle: sandboxed reads and atomic writes under one root directory.

use crate::builder::StorageBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::maintenance::{self, TMP_MARKER};
use crate::security;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[derive(Debug)]
pub struct StorageInner {
    /// Canonical root; every resolved path starts with it.
    pub(crate) root: PathBuf,
    pub(crate) stale_after: Duration,
    pub(crate) tmp_counter: AtomicU64,
}

/// Cheaply cloneable handle to a storage root.
///
/// Every path is relative to the root and is rejected if it would leave it, whether
/// through `..`, an absolute path or a symlink.
///
/// ```rust
/// # use ncraft_storage::{Storage, StorageError};
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), StorageError> {
/// # let tmp = tempfile::tempdir().unwrap();
/// let storage = Storage::builder().root(tmp.path().join("data")).connect().await?;
///
/// storage.write("notes/idea.txt", b"NovaLabs").await?;
/// assert_eq!(storage.read("notes/idea.txt").await?, b"NovaLabs");
/// assert!(storage.resolve("../outside.txt").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) inner: Arc<StorageInner>,
}

impl Deref for Storage {
    type Target = StorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Storage {
    #[must_use = "The storage is not usable until you call .connect()"]
    pub fn builder() -> StorageBuilder {
        StorageBuilder::new()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Physical location of `path` inside the root.
    ///
    /// # Errors
    ///
    /// [`StorageError::PathTraversalAttempt`] if the path escapes the root,
    /// [`StorageError::Io`] if an existing part of it cannot be inspected.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
        security::resolve_path(&self.root, path)
    }

    /// # Errors
    ///
    /// [`StorageError::FileNotFound`] if the file does not exist, [`StorageError::Io`]
    /// for any other read failure.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, StorageError> {
        let resolved = self.resolve(path)?;

        match fs::read(&resolved).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::FileNotFound {
                message: resolved.display().to_string().into(),
                context: None,
            }),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }

    /// Reads and decodes a JSON document; `None` when the file does not exist.
    ///
    /// # Errors
    ///
    /// [`StorageError::Json`] for malformed content, or any error of [`Storage::read`]
    /// other than a missing file.
    pub async fn read_json<T: DeserializeOwned>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Option<T>, StorageError> {
        let path = path.as_ref();
        match self.read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .context(format!("Decoding {}", path.display())),
            Err(StorageError::FileNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Writes `data` atomically: a unique temporary file is written and synced, then
    /// renamed over the target. Missing parent directories are created. Returns the
    /// physical path written.
    ///
    /// # Errors
    ///
    /// [`StorageError::PathTraversalAttempt`] if the path escapes the root,
    /// [`StorageError::Io`] if any filesystem step fails.
    pub async fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<PathBuf, StorageError> {
        let resolved = self.resolve(path)?;

        if let Some(parent) = resolved.parent() {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let temp = unique_tmp_path(&resolved, &self.tmp_counter);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .await
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(data).await.context("Write failed")?;
            file.sync_all().await.context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &resolved).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StorageError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.display(), resolved.display()).into(),
                ),
            });
        }

        if let Some(parent) = resolved.parent() {
            sync_dir(parent).await;
        }

        debug!(path = %resolved.display(), bytes = data.len(), "File saved atomically");
        Ok(resolved)
    }

    /// Encodes `value` as pretty JSON and writes it atomically.
    ///
    /// # Errors
    ///
    /// [`StorageError::Json`] if encoding fails, or any error of [`Storage::write`].
    pub async fn write_json<T: Serialize + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        value: &T,
    ) -> Result<PathBuf, StorageError> {
        let bytes = serde_json::to_vec_pretty(value).context("Encoding JSON")?;
        self.write(path, &bytes).await
    }

    /// # Errors
    ///
    /// [`StorageError::FileNotFound`] if there is nothing to delete,
    /// [`StorageError::Io`] for any other failure.
    pub async fn delete(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let resolved = self.resolve(path)?;
        match fs::remove_file(&resolved).await {
            Ok(()) => {
                debug!(path = %resolved.display(), "File deleted");
                Ok(())
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::FileNotFound {
                message: resolved.display().to_string().into(),
                context: None,
            }),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Failed to delete: {}", resolved.display()).into()),
            }),
        }
    }

    /// # Errors
    ///
    /// Only when the path itself is rejected.
    pub fn exists(&self, path: impl AsRef<Path>) -> Result<bool, StorageError> {
        Ok(self.resolve(path)?.is_file())
    }

    /// Removes temporary files left behind by interrupted writes.
    pub async fn purge_tmp(&self) {
        maintenance::purge_tmp(&self.root, self.stale_after).await;
    }
}

async fn sync_dir(path: &Path) {
    match fs::File::open(path).await {
        Ok(dir) => {
            if let Err(err) = dir.sync_all().await {
                tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("storage");
    target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
}
