use serde::{Deserialize, Serialize};

/// Palette slot a cookbook card is drawn with.
///
/// The shell maps each slot to a concrete color; the core never deals in
/// RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColor {
    Orange,
    LightBlue,
    SkyBlue,
    Lavender,
    PaleGreen,
    Green,
}

impl DisplayColor {
    /// Stable identifier used across the FFI boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayColor::Orange => "orange",
            DisplayColor::LightBlue => "light_blue",
            DisplayColor::SkyBlue => "sky_blue",
            DisplayColor::Lavender => "lavender",
            DisplayColor::PaleGreen => "pale_green",
            DisplayColor::Green => "green",
        }
    }
}

/// A cookbook shown as a folder card in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable key, unique within the catalog
    pub id: String,
    pub title: String,
    pub author: String,
    /// Symbol name of the cover icon
    pub icon: String,
    pub color: DisplayColor,
    /// Card height in points for the staggered grid
    pub height: f32,
    /// Ingredients this cookbook is found by
    #[serde(default)]
    pub tags: Vec<String>,
    /// Key of the recipe opened when the card is selected
    #[serde(default)]
    pub recipe: Option<String>,
}

impl CatalogEntry {
    /// Returns true if any tag equals `ingredient`, ignoring case.
    pub fn has_tag(&self, ingredient: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(ingredient.trim()))
    }

    /// Builds the placeholder recipe shown for cookbooks that do not link a
    /// recipe of their own.
    pub fn fallback_recipe(&self) -> Recipe {
        Recipe {
            id: format!("fallback:{}", self.id),
            title: format!("Creme's {}", self.title),
            icon: self.icon.clone(),
            image_url: None,
            ingredients: vec![
                format!("Ingredients from {}", self.title),
                "Garlic".to_string(),
                "Onion".to_string(),
                "Olive Oil".to_string(),
            ],
            steps: vec![
                format!("Open your {} at the marked page.", self.title),
                "Prep the fresh ingredients on a clean surface.".to_string(),
                "Follow the 'buttery' animations in Tavolo.".to_string(),
                "Serve and enjoy the Creator contest vibe!".to_string(),
            ],
        }
    }
}

/// A recipe as presented in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    /// Symbol name used when no image is available
    pub icon: String,
    /// Remote header image, loaded by the shell
    #[serde(default)]
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}
