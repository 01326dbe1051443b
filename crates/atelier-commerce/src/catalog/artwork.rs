//! Artwork types.

use crate::catalog::Category;
use crate::ids::ArtworkId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A catalog entry representing one piece for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Unique artwork identifier.
    pub id: ArtworkId,
    /// Artwork title.
    pub title: String,
    /// Artist name.
    pub artist: String,
    /// Price in the catalog's smallest currency unit.
    pub price: Price,
    /// Catalog category.
    pub category: Category,
    /// Medium (e.g., "Oil on Canvas").
    #[serde(default)]
    pub medium: String,
    /// Dimensions as displayed (e.g., "24 x 36 in").
    #[serde(default)]
    pub size: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Image path or URL.
    #[serde(default)]
    pub image: String,
    /// Shown on the landing page.
    #[serde(default)]
    pub featured: bool,
}

impl Artwork {
    /// Create an artwork with the fields the cart and filter depend on.
    pub fn new(
        id: impl Into<ArtworkId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
            category,
            medium: String::new(),
            size: String::new(),
            description: String::new(),
            image: String::new(),
            featured: false,
        }
    }

    /// Builder-style medium setter.
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = medium.into();
        self
    }

    /// Builder-style size setter.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "a1",
            "title": "Monsoon Light",
            "artist": "Meera Rao",
            "price": 4000,
            "category": "paintings"
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id.as_str(), "a1");
        assert_eq!(artwork.price, Price::new(4000));
        assert_eq!(artwork.category, Category::Paintings);
        assert!(!artwork.featured);
        assert!(artwork.medium.is_empty());
    }

    #[test]
    fn test_builder() {
        let artwork = Artwork::new("a2", "Ghats at Dawn", "Kabir Sen", Price::new(12000), Category::Sketches)
            .with_medium("Charcoal")
            .with_size("18 x 24 in")
            .featured();
        assert_eq!(artwork.medium, "Charcoal");
        assert_eq!(artwork.size, "18 x 24 in");
        assert!(artwork.featured);
    }
}
