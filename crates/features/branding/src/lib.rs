//! # Logo Synthesis
//!
//! Renders a 200x200 abstract SVG logo for a name. The output depends only on the name and
//! the industry palette, so identical input always produces byte-identical markup.
//!
//! ```rust
//! # use ncraft_branding::synthesize;
//! let logo = synthesize("Acme", "finance");
//! assert_eq!(logo.file_name(), "Acme-logo.svg");
//! assert!(logo.svg().contains("fill=\"#004D40\""));
//! ```

mod hash;
mod logo;
mod pattern;

pub use crate::hash::name_hash;
pub use crate::logo::{Logo, synthesize, synthesize_for};
pub use crate::pattern::Pattern;
