//! Catalog search module.
//!
//! Contains the category and price-bracket filter over the artwork list.

mod filter;
mod selection;

pub use filter::{filter, CategorySelection, PriceBracket, PriceRange};
pub use selection::CatalogFilter;
