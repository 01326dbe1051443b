//! Category and price filters over the artwork list.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Artwork, Category};
use crate::error::CommerceError;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Selector value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Which categories a filter admits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// Every category.
    #[default]
    All,
    /// A single known category.
    Only(Category),
    /// A name outside the fixed category set. Matches nothing.
    Unknown(String),
}

impl CategorySelection {
    /// Check whether an artwork in `category` passes this selection.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
            CategorySelection::Unknown(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl FromStr for CategorySelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            match Category::from_slug(s) {
                Some(category) => CategorySelection::Only(category),
                None => CategorySelection::Unknown(s.to_string()),
            }
        })
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(ALL_CATEGORIES),
            CategorySelection::Only(category) => write!(f, "{}", category),
            CategorySelection::Unknown(name) => f.write_str(name),
        }
    }
}

/// A price interval, inclusive on both bounds. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Option<Price>,
}

impl PriceRange {
    /// Range with an upper bound.
    pub const fn between(min: u64, max: u64) -> Self {
        Self {
            min: Price::new(min),
            max: Some(Price::new(max)),
        }
    }

    /// Range with no upper bound.
    pub const fn at_least(min: u64) -> Self {
        Self {
            min: Price::new(min),
            max: None,
        }
    }

    /// The unbounded range, admitting every price.
    pub const fn any() -> Self {
        Self::at_least(0)
    }

    /// Check if `price` falls within the range.
    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::any()
    }
}

/// The fixed price brackets offered by the catalog browser.
///
/// Adjacent brackets share their boundary price, so an artwork priced
/// exactly at a boundary shows up under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceBracket {
    #[default]
    AllPrices,
    Under5000,
    From5000To10000,
    From10000To15000,
    Above15000,
}

impl PriceBracket {
    /// Every bracket, in index order.
    pub const ALL: [PriceBracket; 5] = [
        PriceBracket::AllPrices,
        PriceBracket::Under5000,
        PriceBracket::From5000To10000,
        PriceBracket::From10000To15000,
        PriceBracket::Above15000,
    ];

    /// Select a bracket by its position in the table.
    pub fn from_index(index: usize) -> Result<Self, CommerceError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CommerceError::UnknownPriceBracket {
                index,
                count: Self::ALL.len(),
            })
    }

    /// Position in the table.
    pub fn index(&self) -> usize {
        match self {
            PriceBracket::AllPrices => 0,
            PriceBracket::Under5000 => 1,
            PriceBracket::From5000To10000 => 2,
            PriceBracket::From10000To15000 => 3,
            PriceBracket::Above15000 => 4,
        }
    }

    pub fn range(&self) -> PriceRange {
        match self {
            PriceBracket::AllPrices => PriceRange::any(),
            PriceBracket::Under5000 => PriceRange::between(0, 5000),
            PriceBracket::From5000To10000 => PriceRange::between(5000, 10000),
            PriceBracket::From10000To15000 => PriceRange::between(10000, 15000),
            PriceBracket::Above15000 => PriceRange::at_least(15000),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBracket::AllPrices => "All Prices",
            PriceBracket::Under5000 => "Under \u{20b9}5,000",
            PriceBracket::From5000To10000 => "\u{20b9}5,000 - \u{20b9}10,000",
            PriceBracket::From10000To15000 => "\u{20b9}10,000 - \u{20b9}15,000",
            PriceBracket::Above15000 => "Above \u{20b9}15,000",
        }
    }
}

/// Select the artworks that pass both the category and the price filter.
///
/// A stable filter: output keeps the input's relative order. Produces an
/// empty list when nothing matches.
pub fn filter<'a>(
    artworks: &'a [Artwork],
    category: &CategorySelection,
    range: &PriceRange,
) -> Vec<&'a Artwork> {
    artworks
        .iter()
        .filter(|a| category.matches(a.category) && range.contains(a.price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artworks() -> Vec<Artwork> {
        vec![
            Artwork::new("a1", "Monsoon Light", "Meera Rao", Price::new(4000), Category::Paintings),
            Artwork::new("a2", "Ghats at Dawn", "Kabir Sen", Price::new(12000), Category::Sketches),
        ]
    }

    fn ids(found: &[&Artwork]) -> Vec<String> {
        found.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn test_all_and_unbounded_returns_everything() {
        let list = artworks();
        let found = filter(&list, &CategorySelection::All, &PriceRange::any());
        assert_eq!(ids(&found), vec!["a1", "a2"]);
    }

    #[test]
    fn test_category_and_bracket() {
        let list = artworks();

        let found = filter(&list, &"paintings".into(), &PriceRange::between(0, 5000));
        assert_eq!(ids(&found), vec!["a1"]);

        let found = filter(&list, &"all".into(), &PriceRange::between(10000, 15000));
        assert_eq!(ids(&found), vec!["a2"]);

        let found = filter(&list, &"drawings".into(), &PriceRange::any());
        assert!(found.is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let list = artworks();
        let selection: CategorySelection = "sculptures".into();
        assert_eq!(selection, CategorySelection::Unknown("sculptures".to_string()));
        assert!(filter(&list, &selection, &PriceRange::any()).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = PriceRange::between(5000, 10000);
        assert!(range.contains(Price::new(5000)));
        assert!(range.contains(Price::new(10000)));
        assert!(!range.contains(Price::new(4999)));
        assert!(!range.contains(Price::new(10001)));
    }

    #[test]
    fn test_boundary_price_in_two_brackets() {
        let price = Price::new(5000);
        let hits: Vec<usize> = PriceBracket::ALL
            .iter()
            .filter(|b| b.range().contains(price))
            .map(|b| b.index())
            .collect();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn test_bracket_table() {
        assert_eq!(PriceBracket::from_index(0).unwrap().range(), PriceRange::any());
        assert_eq!(
            PriceBracket::from_index(3).unwrap().range(),
            PriceRange::between(10000, 15000)
        );
        assert_eq!(
            PriceBracket::from_index(4).unwrap().range(),
            PriceRange::at_least(15000)
        );
        for (i, bracket) in PriceBracket::ALL.iter().enumerate() {
            assert_eq!(bracket.index(), i);
        }
    }

    #[test]
    fn test_bracket_index_out_of_range() {
        assert!(matches!(
            PriceBracket::from_index(5),
            Err(CommerceError::UnknownPriceBracket { index: 5, count: 5 })
        ));
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let list = vec![
            Artwork::new("z", "Z", "A", Price::new(300), Category::Drawings),
            Artwork::new("b", "B", "A", Price::new(100), Category::Drawings),
            Artwork::new("m", "M", "A", Price::new(200), Category::Paintings),
            Artwork::new("a", "A", "A", Price::new(50), Category::Drawings),
        ];
        let found = filter(&list, &Category::Drawings.into(), &PriceRange::any());
        assert_eq!(ids(&found), vec!["z", "b", "a"]);
    }
}
