//! Artwork catalog module.
//!
//! Contains types for artworks, categories, and the static catalog.

mod artwork;
mod catalog;
mod category;

pub use artwork::Artwork;
pub use catalog::Catalog;
pub use category::{Category, CategoryInfo};
