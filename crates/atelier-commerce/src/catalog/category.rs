//! Category types for artwork organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of artwork categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Paintings,
    Sketches,
    Drawings,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Paintings, Category::Sketches, Category::Drawings];

    /// The slug used in catalog data and filter selectors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Paintings => "paintings",
            Category::Sketches => "sketches",
            Category::Drawings => "drawings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Paintings => "Paintings",
            Category::Sketches => "Sketches",
            Category::Drawings => "Drawings",
        }
    }

    /// Parse a category slug. Matching is exact, as in catalog data.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation metadata for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInfo {
    /// The category this describes.
    pub id: Category,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Cover image path.
    #[serde(default)]
    pub image: String,
}

impl CategoryInfo {
    /// Metadata with the category's default display name and no copy.
    pub fn basic(id: Category) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            description: String::new(),
            image: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(Category::from_slug("sculptures"), None);
        assert_eq!(Category::from_slug("Paintings"), None);
        assert_eq!(Category::from_slug("all"), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Sketches).unwrap();
        assert_eq!(json, "\"sketches\"");
        let parsed: Category = serde_json::from_str("\"drawings\"").unwrap();
        assert_eq!(parsed, Category::Drawings);
    }
}
