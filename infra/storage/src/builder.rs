use crate::engine::{Storage, StorageInner};
use crate::error::{StorageError, StorageErrorExt};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use tokio::fs;
use tracing::info;

const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct BuilderConfig {
    create: bool,
    purge: bool,
    stale_after: Duration,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { create: true, purge: true, stale_after: DEFAULT_STALE_AFTER }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Fluent setup for [`Storage`]; a root is required before [`StorageBuilder::connect`].
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StorageBuilder<S: Sealed = NoRoot> {
    state: S,
    config: BuilderConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StorageBuilder<S> {
    /// Whether a missing root directory is created (default `true`).
    #[must_use = "The builder must be connected before it can be used"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    /// Whether stale temporary files under the root are swept on connect (default `true`).
    /// Turn it off for roots the store does not own, such as a user-chosen export directory.
    #[must_use = "The builder must be connected before it can be used"]
    pub const fn purge(mut self, enable: bool) -> Self {
        self.config.purge = enable;
        self
    }

    /// Age after which leftover temporary files are removed on connect (default 5 min).
    #[must_use = "The builder must be connected before it can be used"]
    pub const fn stale_after(mut self, age: Duration) -> Self {
        self.config.stale_after = age;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> StorageBuilder<N> {
        StorageBuilder { state, config: self.config }
    }
}

impl StorageBuilder<NoRoot> {
    #[must_use = "The builder must be connected before it can be used"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "The builder must be connected before it can be used"]
    pub fn root(self, path: impl Into<PathBuf>) -> StorageBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }
}

impl StorageBuilder<WithRoot> {
    /// Creates the root if asked to, canonicalizes it and, unless disabled, sweeps stale
    /// temporary files.
    ///
    /// # Errors
    ///
    /// [`StorageError::Io`] when the root is missing and `create` is off, or when it
    /// cannot be created or resolved.
    pub async fn connect(self) -> Result<Storage, StorageError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .await
                .context(format!("Failed to bootstrap storage root: {}", root.display()))?;
        }

        let canonical = fs::canonicalize(root)
            .await
            .context(format!("Failed to resolve storage root: {}", root.display()))?;
        info!(path = %canonical.display(), "Storage root ready");

        let storage = Storage {
            inner: Arc::new(StorageInner {
                root: canonical,
                stale_after: self.config.stale_after,
                tmp_counter: AtomicU64::new(1),
            }),
        };

        if self.config.purge {
            storage.purge_tmp().await;
        }

        Ok(storage)
    }
}
