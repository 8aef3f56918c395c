//! Facade crate for `NameCraft` features and shared modules.
//! Re-exports domain/kernel primitives and wires the slices into one [`Platform`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`domain::config::StudioConfig`] (see [`kernel::config::load_config`]).
//! - Call [`init`] once and drive everything through the returned [`Platform`].

mod error;

pub use crate::error::{PlatformError, PlatformErrorExt};
pub use ncraft_domain as domain;
pub use ncraft_kernel as kernel;
pub use ncraft_storage as storage;

use ncraft_branding::{Logo, synthesize_for};
use ncraft_domain::Industry;
use ncraft_domain::config::StudioConfig;
use ncraft_ideation::Studio;
use ncraft_storage::{Favorites, Storage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Feature registry for runtime introspection.
pub mod features {
    pub use ncraft_availability as availability;
    pub use ncraft_branding as branding;
    pub use ncraft_ideation as ideation;
    pub use ncraft_naming as naming;
    pub use ncraft_trademark as trademark;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["naming", "trademark", "branding", "availability", "ideation"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The initialized slices behind one configuration.
#[derive(Debug)]
pub struct Platform {
    config: StudioConfig,
    studio: Studio,
    favorites: Favorites,
}

/// Builds the studio and opens the favorites store under `storage.data_dir`.
///
/// # Errors
/// [`PlatformError::Ideation`] if the availability checks cannot be set up,
/// [`PlatformError::Storage`] if the data directory is unusable.
pub async fn init(config: StudioConfig) -> Result<Platform, PlatformError> {
    let studio = Studio::new(&config)?;
    Platform::assemble(config, studio).await
}

impl Platform {
    /// Like [`init`] with an already built studio, e.g. one with a seeded simulator.
    ///
    /// # Errors
    /// [`PlatformError::Storage`] if the data directory is unusable.
    pub async fn assemble(config: StudioConfig, studio: Studio) -> Result<Self, PlatformError> {
        let data = Storage::builder()
            .root(&config.storage.data_dir)
            .connect()
            .await
            .context("Opening the data directory")?;

        info!(slices = features::ENABLED.len(), "Platform initialized");

        Ok(Self { config, studio, favorites: Favorites::new(data) })
    }

    #[must_use]
    pub const fn config(&self) -> &StudioConfig {
        &self.config
    }

    #[must_use]
    pub const fn studio(&self) -> &Studio {
        &self.studio
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Renders the logo of `name` and writes it as `<name>-logo.svg` under `dir`, or
    /// under `storage.export_dir` when no directory is given. Returns the written path.
    ///
    /// # Errors
    /// [`PlatformError::Storage`] if the directory is unusable or the name would
    /// leave it.
    pub async fn export_logo(
        &self,
        name: &str,
        industry: Option<Industry>,
        dir: Option<&Path>,
    ) -> Result<PathBuf, PlatformError> {
        let logo = synthesize_for(name, industry);
        let dir = dir.unwrap_or(self.config.storage.export_dir.as_path());
        export(&logo, dir).await
    }
}

async fn export(logo: &Logo, dir: &Path) -> Result<PathBuf, PlatformError> {
    let target = Storage::builder()
        .root(dir)
        .purge(false)
        .connect()
        .await
        .context(format!("Opening export directory {}", dir.display()))?;

    let path = target
        .write(logo.file_name(), logo.svg().as_bytes())
        .await
        .context(format!("Exporting logo for {}", logo.name()))?;

    info!(path = %path.display(), mime = logo.mime_type(), "Logo exported");
    Ok(path)
}
