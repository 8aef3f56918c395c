//! Sandboxed file storage for NameCraft.
//!
//! # Core Features
//!
//! - **Sandbox Security**: every path is resolved against a canonical root; `..`, absolute
//!   paths and symlinks leading outside are rejected.
//! - **Atomic Writes**: unique temporary file, `fsync`, then `rename`, so a crash never
//!   leaves a half-written file behind.
//! - **Self-Healing**: stale temporary files from interrupted writes are swept on connect.
//! - **Favorites**: [`Favorites`] keeps the user's shortlisted names in `favorites.json`.
//! - **Exports**: [`Storage::write`] returns the physical path, which is what a logo export
//!   reports back to the user.
//!
//! # Example
//!
//! ```rust
//! use ncraft_storage::{Favorites, Storage, StorageError, Toggle};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), StorageError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     let storage = Storage::builder().root(tmp.path()).connect().await?;
//!     let favorites = Favorites::new(storage.clone());
//!
//!     assert_eq!(favorites.toggle("NovaLabs").await?, Toggle::Added);
//!     assert_eq!(favorites.list().await?, ["NovaLabs"]);
//!
//!     let path = storage.write("NovaLabs-logo.svg", b"<svg/>").await?;
//!     assert!(path.ends_with("NovaLabs-logo.svg"));
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod favorites;
mod maintenance;
mod security;

pub use builder::StorageBuilder;
pub use engine::Storage;
pub use error::{StorageError, StorageErrorExt};
pub use favorites::{Favorites, Toggle};
