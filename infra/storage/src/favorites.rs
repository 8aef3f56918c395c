use crate::engine::Storage;
use crate::error::StorageError;
use ncraft_domain::constants::FAVORITES_KEY;
use tokio::sync::Mutex;
use tracing::debug;

/// What [`Favorites::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Favorite names persisted as a JSON array in `favorites.json` under the storage root,
/// in insertion order and without duplicates. A missing file is an empty list.
///
/// Updates are read-modify-write cycles serialized by an async lock, so concurrent
/// toggles on one handle never lose each other's changes.
#[derive(Debug)]
pub struct Favorites {
    storage: Storage,
    file: String,
    lock: Mutex<()>,
}

impl Favorites {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage, file: format!("{FAVORITES_KEY}.json"), lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file
    }

    /// # Errors
    /// [`StorageError`] when the file cannot be read or decoded.
    pub async fn list(&self) -> Result<Vec<String>, StorageError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// # Errors
    /// [`StorageError`] when the file cannot be read or decoded.
    pub async fn contains(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.list().await?.iter().any(|favorite| favorite == name))
    }

    /// Appends `name`; `false` when it was already a favorite.
    ///
    /// # Errors
    /// [`StorageError::Internal`] for a blank name, or any read/write failure.
    pub async fn add(&self, name: &str) -> Result<bool, StorageError> {
        let name = validate(name)?;
        self.update(|favorites| {
            if favorites.iter().any(|f| f == name) {
                return false;
            }
            favorites.push(name.to_owned());
            true
        })
        .await
    }

    /// Removes `name`; `false` when it was not a favorite.
    ///
    /// # Errors
    /// [`StorageError::Internal`] for a blank name, or any read/write failure.
    pub async fn remove(&self, name: &str) -> Result<bool, StorageError> {
        let name = validate(name)?;
        self.update(|favorites| {
            let before = favorites.len();
            favorites.retain(|f| f != name);
            favorites.len() != before
        })
        .await
    }

    /// Adds `name` if absent, removes it otherwise.
    ///
    /// # Errors
    /// [`StorageError::Internal`] for a blank name, or any read/write failure.
    pub async fn toggle(&self, name: &str) -> Result<Toggle, StorageError> {
        let name = validate(name)?;
        let added = self
            .update(|favorites| {
                if let Some(index) = favorites.iter().position(|f| f == name) {
                    favorites.remove(index);
                    false
                } else {
                    favorites.push(name.to_owned());
                    true
                }
            })
            .await?;

        Ok(if added { Toggle::Added } else { Toggle::Removed })
    }

    async fn load(&self) -> Result<Vec<String>, StorageError> {
        let favorites: Option<Vec<String>> = self.storage.read_json(&self.file).await?;
        Ok(favorites.unwrap_or_default())
    }

    /// Applies `change` under the lock and persists the list if it differs afterwards.
    async fn update<F, R>(&self, change: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut Vec<String>) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut favorites = self.load().await?;
        let before = favorites.len();

        let outcome = change(&mut favorites);
        if favorites.len() != before {
            self.storage.write_json(&self.file, &favorites).await?;
            debug!(file = %self.file, count = favorites.len(), "Favorites updated");
        }

        Ok(outcome)
    }
}

fn validate(name: &str) -> Result<&str, StorageError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StorageError::Internal {
            message: "Favorite name cannot be empty".into(),
            context: None,
        });
    }
    Ok(trimmed)
}
