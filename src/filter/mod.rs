//! Ingredient filter for the library screen.

use crate::model::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The set of ingredients the user has picked.
///
/// Ingredients are kept trimmed and unique ignoring case; the first spelling
/// added is the one shown. Iteration is sorted case-insensitively, which is
/// also the order the selected chips are shown in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientFilter {
    /// Lower-cased ingredient to its displayed spelling
    selected: BTreeMap<String, String>,
}

fn key(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

impl IngredientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient. Returns false if the input was blank or already
    /// selected in any casing.
    pub fn insert(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return false;
        }
        let key = key(ingredient);
        if self.selected.contains_key(&key) {
            return false;
        }
        self.selected.insert(key, ingredient.to_string());
        true
    }

    /// Removes an ingredient in any casing. Returns false if it was not
    /// selected.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        self.selected.remove(&key(ingredient)).is_some()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.selected.contains_key(&key(ingredient))
    }

    /// Selected ingredients in sorted order.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.values().map(String::as_str)
    }

    /// Returns true if `entry` should be shown under this filter.
    ///
    /// With nothing selected every entry matches. Otherwise an entry matches
    /// when at least one of its tags is selected.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.is_empty() || self.selected().any(|ingredient| entry.has_tag(ingredient))
    }

    /// Filters `entries`, preserving their order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}
