//! Fixed vocabularies shared by the generator, the availability checks and storage.

use crate::industry::Industry;

/// Prefixes applied to every keyword regardless of industry.
pub const GENERIC_PREFIXES: [&str; 10] =
    ["Pro", "Smart", "Peak", "Prime", "Elite", "Next", "Future", "Nova", "Apex", "Core"];

/// Suffixes applied to every keyword regardless of industry.
pub const GENERIC_SUFFIXES: [&str; 10] =
    ["Hub", "Zone", "Space", "Works", "Solutions", "Labs", "Tech", "Logic", "Mind", "Sync"];

/// Lexical endings appended by the extended generator.
pub const LEXICAL_ENDINGS: [&str; 3] = ["ly", "ify", "io"];

/// Vowels stripped by the extended generator.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Storage key of the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// MIME type of exported logos.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Fallback industry for logo palettes.
pub const DEFAULT_LOGO_INDUSTRY: Industry = Industry::Technology;
