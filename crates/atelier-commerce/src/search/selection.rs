//! The catalog browser's current filter selection.

use crate::catalog::Artwork;
use crate::error::CommerceError;
use crate::search::{filter, CategorySelection, PriceBracket};

/// Category and price-bracket selection, as chosen in the browse sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub category: CategorySelection,
    pub bracket: PriceBracket,
}

impl CatalogFilter {
    pub fn new(category: CategorySelection, bracket: PriceBracket) -> Self {
        Self { category, bracket }
    }

    /// Build from raw selector values: a category name (`"all"` or a slug)
    /// and a bracket index.
    pub fn from_parts(category: &str, bracket_index: usize) -> Result<Self, CommerceError> {
        Ok(Self {
            category: category.into(),
            bracket: PriceBracket::from_index(bracket_index)?,
        })
    }

    /// Visible subset of `artworks` under this selection.
    pub fn apply<'a>(&self, artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
        filter(artworks, &self.category, &self.bracket.range())
    }

    /// True when neither category nor price is narrowed.
    pub fn is_default(&self) -> bool {
        self.category.is_all() && self.bracket == PriceBracket::AllPrices
    }

    /// Reset both selections.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Price;

    #[test]
    fn test_default_shows_everything() {
        let list = vec![
            Artwork::new("a1", "A", "X", Price::new(4000), Category::Paintings),
            Artwork::new("a2", "B", "Y", Price::new(22000), Category::Drawings),
        ];
        let selection = CatalogFilter::default();
        assert!(selection.is_default());
        assert_eq!(selection.apply(&list).len(), 2);
    }

    #[test]
    fn test_from_parts_and_clear() {
        let list = vec![
            Artwork::new("a1", "A", "X", Price::new(4000), Category::Paintings),
            Artwork::new("a2", "B", "Y", Price::new(22000), Category::Paintings),
        ];
        let mut selection = CatalogFilter::from_parts("paintings", 4).unwrap();
        assert!(!selection.is_default());
        let found: Vec<_> = selection.apply(&list).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(found, vec!["a2"]);

        selection.clear();
        assert!(selection.is_default());
    }

    #[test]
    fn test_from_parts_rejects_bad_bracket() {
        assert!(CatalogFilter::from_parts("all", 9).is_err());
    }
}
