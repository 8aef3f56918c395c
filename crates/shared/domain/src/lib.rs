//! # Domain Models
//!
//! Pure data for NameCraft with minimal dependencies (`serde`, `bitflags`): industry
//! tables, name patterns, palettes, check results and configuration.
//! No I/O, networking, or heavy logic here, just data and simple helpers.

pub mod availability;
pub mod config;
pub mod constants;
pub mod industry;
pub mod palette;
pub mod patterns;
pub mod record;
pub mod suffix;
pub mod trademark;

pub use industry::Industry;
