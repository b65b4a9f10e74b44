use serde::{Deserialize, Serialize};

/// One line of a generated grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
}

impl GroceryItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        GroceryItem {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Ingredient line used when a recipe is synthesized from a list,
    /// e.g. `"Paneer (250g)"`.
    pub fn ingredient_line(&self) -> String {
        format!("{} ({})", self.name, self.quantity)
    }
}
