//! # Ideation
//!
//! The end-to-end flow: keywords in, screened candidates out.
//!
//! A [`Studio`] generates candidate names, then fans out one task per candidate and joins
//! them all. Inside a candidate the trademark, domain and social checks run concurrently
//! and the logo is rendered; the assembled records come back in candidate order.
//!
//! ```rust,ignore
//! let studio = Studio::new(&StudioConfig::default())?;
//! let batch = studio
//!     .ideate(IdeationRequest::new(["cloud"]).industry(Some(Industry::Technology)))
//!     .await?;
//! ```

mod error;
mod request;
mod studio;

pub use crate::error::{IdeationError, IdeationErrorExt};
pub use crate::request::{IdeationBatch, IdeationRequest};
pub use crate::studio::Studio;
pub use ncraft_naming::GenerationFlow;
