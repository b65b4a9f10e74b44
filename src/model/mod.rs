//! Data model shared by every screen.
//!
//! All records are immutable once created. Cookbooks and recipes come from
//! the bundled sample catalog, grocery items and synthesized recipes come
//! from the generation flow.

mod catalog;
mod grocery;
mod onboarding;
mod share;

pub use catalog::{CatalogEntry, DisplayColor, Recipe};
pub use grocery::GroceryItem;
pub use onboarding::OnboardingPage;
