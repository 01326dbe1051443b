//! The static artwork catalog.

use std::collections::HashSet;

use crate::catalog::{Artwork, Category, CategoryInfo};
use crate::error::CommerceError;
use crate::ids::ArtworkId;
use serde::{Deserialize, Serialize};

/// The full artwork list and category metadata the storefront browses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    categories: Vec<CategoryInfo>,
    artworks: Vec<Artwork>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    categories: Vec<CategoryInfo>,
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate artwork ids.
    ///
    /// With no category metadata, every category gets its default name.
    pub fn new(
        artworks: Vec<Artwork>,
        categories: Vec<CategoryInfo>,
    ) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for artwork in &artworks {
            if !seen.insert(artwork.id.as_str()) {
                return Err(CommerceError::DuplicateArtwork(artwork.id.to_string()));
            }
        }

        let categories = if categories.is_empty() {
            Category::ALL.into_iter().map(CategoryInfo::basic).collect()
        } else {
            categories
        };

        Ok(Self {
            categories,
            artworks,
        })
    }

    /// Parse a catalog from its JSON form:
    /// `{ "categories": [...], "artworks": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::new(raw.artworks, raw.categories)
    }

    /// All artworks, in catalog order.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Category metadata, in display order.
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Look up an artwork by id.
    pub fn find(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| &a.id == id)
    }

    /// Look up an artwork by id, failing if it is not in the catalog.
    pub fn get(&self, id: &ArtworkId) -> Result<&Artwork, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ArtworkNotFound(id.to_string()))
    }

    /// Artworks flagged for the landing page.
    pub fn featured(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter().filter(|a| a.featured)
    }

    /// Number of artworks in a category.
    pub fn count_in(&self, category: Category) -> usize {
        self.artworks
            .iter()
            .filter(|a| a.category == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}
