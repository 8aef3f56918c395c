//! # Name Generation
//!
//! Turns keywords and an optional [`Industry`] into candidate business names.
//!
//! ## Flows
//!
//! 1.  **Primary ([`GenerationFlow::Primary`]):** every keyword capitalized, wrapped in the
//!     generic prefixes and suffixes and, with an industry, in that industry's affix lists.
//! 2.  **Extended ([`GenerationFlow::Extended`]):** weighted industry patterns, compounds with
//!     common industry words, lexical transformations and pairwise keyword combinations,
//!     bounded in length and ranked towards the ideal length.
//!
//! Randomness is injected, so a seeded [`rand::rngs::StdRng`] pins the output:
//!
//! ```rust
//! # use ncraft_naming::{GenerationFlow, NameGenerator};
//! # use ncraft_domain::{Industry, config::GeneratorConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let generator = NameGenerator::new(GeneratorConfig::default());
//! let mut rng = StdRng::seed_from_u64(42);
//! let names = generator
//!     .generate(&["cloud"], Some(Industry::Technology), GenerationFlow::Primary, &mut rng)
//!     .unwrap();
//! assert_eq!(names.len(), 8);
//! ```

mod affix;
mod error;
mod generator;
mod pattern;

pub use crate::error::{NamingError, NamingErrorExt};
pub use crate::generator::NameGenerator;
pub use ncraft_domain::Industry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which candidate pool to draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationFlow {
    #[default]
    Primary,
    Extended,
}

impl GenerationFlow {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for GenerationFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
