//! Catalog products, title ordering, and tag filtering.
//!
//! The catalog arrives from the remote catalog service already converted to
//! [`Coffee`] values. Ordering and filtering are pure functions here so the
//! storefront handlers stay thin.

use serde::{Deserialize, Serialize};

use crate::types::{CoffeeId, Money};

/// A coffee in the catalog, including the visitor's selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    /// Catalog identifier.
    pub id: CoffeeId,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Category tags (e.g., `tradicional`, `gelado`, `com leite`).
    pub tags: Vec<String>,
    /// Price for a single unit.
    pub price: Money,
    /// Image path for display.
    pub image: String,
    /// Quantity currently selected by the visitor. Floor 0.
    pub quantity: u32,
    /// Whether the visitor marked this coffee as a favorite.
    pub favorite: bool,
}

impl Coffee {
    /// Whether this coffee carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Bump the selected quantity. Unbounded.
    pub const fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// Lower the selected quantity, flooring at 0.
    pub const fn decrement_quantity(&mut self) {
        if self.quantity > 0 {
            self.quantity -= 1;
        }
    }

    /// Flip the favorite flag.
    pub const fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}

/// Sort coffees by title, folding case and Latin accents so that pt-BR
/// titles order the way a customer expects (`Café` next to `Cappuccino`,
/// not after `Zumo`).
pub fn sort_by_title(coffees: &mut [Coffee]) {
    coffees.sort_by_cached_key(|coffee| title_sort_key(&coffee.title));
}

/// Collation key for a title: lowercased with Latin accents folded to
/// their base letter.
#[must_use]
pub fn title_sort_key(title: &str) -> String {
    title.to_lowercase().chars().map(fold_accent).collect()
}

/// Keep only the coffees whose tag set contains `tag`.
///
/// Filtering is never cumulative: each call starts from the full list it is
/// given, so selecting a new category replaces the previous filter rather
/// than intersecting with it.
#[must_use]
pub fn filter_by_tag(coffees: &[Coffee], tag: &str) -> Vec<Coffee> {
    coffees
        .iter()
        .filter(|coffee| coffee.has_tag(tag))
        .cloned()
        .collect()
}

/// Fold a lowercase Latin-1 accented character to its base letter.
const fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee(id: &str, title: &str, tags: &[&str]) -> Coffee {
        Coffee {
            id: CoffeeId::new(id),
            title: title.to_string(),
            description: String::new(),
            tags: tags.iter().map(ToString::to_string).collect(),
            price: Money::brl("6.90".parse().expect("decimal")),
            image: String::new(),
            quantity: 0,
            favorite: false,
        }
    }

    #[test]
    fn test_sort_folds_case_and_accents() {
        let mut coffees = vec![
            coffee("0", "Mocaccino", &[]),
            coffee("1", "Árabe", &[]),
            coffee("2", "capuccino", &[]),
            coffee("3", "Café com Leite", &[]),
        ];
        sort_by_title(&mut coffees);

        let titles: Vec<&str> = coffees.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Árabe", "Café com Leite", "capuccino", "Mocaccino"]
        );
    }

    #[test]
    fn test_title_sort_key() {
        assert_eq!(title_sort_key("Café Gelado"), "cafe gelado");
        assert_eq!(title_sort_key("Expresso"), "expresso");
        assert_eq!(title_sort_key("AÇAÍ"), "acai");
    }

    #[test]
    fn test_filter_keeps_only_matching_tag() {
        let coffees = vec![
            coffee("0", "Expresso Tradicional", &["tradicional"]),
            coffee("1", "Expresso Gelado", &["tradicional", "gelado"]),
            coffee("2", "Frappuccino", &["gelado", "com leite"]),
        ];

        let filtered = filter_by_tag(&coffees, "gelado");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.has_tag("gelado")));

        // Not cumulative: filtering the full list again by a different tag
        // replaces the previous selection instead of intersecting it.
        let refiltered = filter_by_tag(&coffees, "tradicional");
        assert_eq!(refiltered.len(), 2);
        assert!(refiltered.iter().any(|c| !c.has_tag("gelado")));
    }

    #[test]
    fn test_filter_unknown_tag_is_empty() {
        let coffees = vec![coffee("0", "Expresso", &["tradicional"])];
        assert!(filter_by_tag(&coffees, "especial").is_empty());
    }

    #[test]
    fn test_quantity_floor_is_zero() {
        let mut c = coffee("0", "Expresso", &[]);
        c.decrement_quantity();
        assert_eq!(c.quantity, 0);

        c.increment_quantity();
        c.increment_quantity();
        assert_eq!(c.quantity, 2);

        c.decrement_quantity();
        assert_eq!(c.quantity, 1);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut c = coffee("0", "Expresso", &[]);
        assert!(!c.favorite);
        c.toggle_favorite();
        assert!(c.favorite);
        c.toggle_favorite();
        assert!(!c.favorite);
    }
}
