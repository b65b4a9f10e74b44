//! Bundled sample catalog.
//!
//! The library screen, the onboarding carousel and the ingredient chips are
//! all fed from a YAML document compiled into the binary. Nothing here is
//! ever written back.

use crate::model::{CatalogEntry, OnboardingPage, Recipe};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("catalog.yaml");

/// Errors that can occur when loading a catalog document.
#[derive(Error, Debug)]
pub enum SampleDataError {
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Duplicate cookbook id: {0}")]
    DuplicateCookbook(String),

    #[error("Cookbook {cookbook} links unknown recipe {recipe}")]
    UnknownRecipe { cookbook: String, recipe: String },
}

/// Static data backing one app session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleData {
    pub cookbooks: Vec<CatalogEntry>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Chips offered while no ingredient is selected
    #[serde(default)]
    pub suggested_ingredients: Vec<String>,
    #[serde(default)]
    pub onboarding: Vec<OnboardingPage>,
}

impl SampleData {
    /// Loads the catalog shipped with the library.
    pub fn bundled() -> Result<Self, SampleDataError> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    /// Parses and validates a catalog document.
    ///
    /// Every cookbook id must be unique and every `recipe` key must name a
    /// recipe in the same document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SampleDataError> {
        let data: SampleData = serde_yaml::from_str(yaml)?;

        let mut seen = HashSet::new();
        for cookbook in &data.cookbooks {
            if !seen.insert(cookbook.id.as_str()) {
                return Err(SampleDataError::DuplicateCookbook(cookbook.id.clone()));
            }
            if let Some(recipe) = &cookbook.recipe {
                if data.recipe(recipe).is_none() {
                    return Err(SampleDataError::UnknownRecipe {
                        cookbook: cookbook.id.clone(),
                        recipe: recipe.clone(),
                    });
                }
            }
        }

        log::debug!(
            "Loaded catalog: {} cookbooks, {} recipes",
            data.cookbooks.len(),
            data.recipes.len()
        );
        Ok(data)
    }

    /// Looks up a cookbook by id.
    pub fn cookbook(&self, id: &str) -> Option<&CatalogEntry> {
        self.cookbooks.iter().find(|c| c.id == id)
    }

    /// Looks up a recipe by id.
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Returns the recipe opened from a cookbook card.
    ///
    /// Cookbooks that link a recipe get that recipe; all others get their
    /// synthesized fallback.
    pub fn recipe_for(&self, cookbook: &CatalogEntry) -> Recipe {
        cookbook
            .recipe
            .as_deref()
            .and_then(|id| self.recipe(id))
            .cloned()
            .unwrap_or_else(|| cookbook.fallback_recipe())
    }
}
