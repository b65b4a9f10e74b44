use super::GeneratedList;
use crate::classify::{LinkClassification, LinkKind};
use crate::model::{GroceryItem, Recipe};

const SOCIAL_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=1000&auto=format&fit=crop";

/// Builds the canned list for a classified link.
///
/// Every bucket yields at least one item. Only unrecognized links come
/// without a recipe.
pub fn template_for(link: &LinkClassification) -> GeneratedList {
    let (items, recipe) = match link.kind {
        LinkKind::KnownRecipeVideo => {
            let items = items(&[
                ("Paneer", "250g"),
                ("Butter", "3 tbsp"),
                ("Tomatoes", "4 large"),
                ("Cashews", "12-15"),
                ("Heavy Cream", "2 tbsp"),
                ("Ginger & Garlic Paste", "1 tbsp"),
                ("Kashmiri Red Chili Powder", "1 tsp"),
                ("Kasuri Methi", "1 tsp"),
                ("Garam Masala", "½ tsp"),
            ]);
            let recipe = synthesize(
                "generated:paneer-butter-masala",
                "Authentic Paneer Butter Masala",
                "flame.fill",
                link.thumbnail_url(),
                &items,
                &[
                    "Sauté tomatoes, onions, and cashews in a little butter until soft, then blend into a silky smooth puree.",
                    "In a pan, melt the remaining butter and add ginger-garlic paste and chili powder.",
                    "Pour in the tomato-cashew puree and simmer until the fat separates.",
                    "Add the garam masala, salt, and sugar to balance the tanginess.",
                    "Gently stir in the paneer cubes and let them simmer in the gravy for 2-3 minutes.",
                    "Finish by crushing kasuri methi on top and swirling in fresh cream for that restaurant-style richness.",
                    "Serve hot with buttery garlic naan or jeera rice.",
                ],
            );
            (items, Some(recipe))
        }
        LinkKind::GenericVideo => {
            let items = items(&[
                ("Main Ingredient", "to taste"),
                ("Spices", "as shown"),
                ("Oil/Butter", "for cooking"),
            ]);
            let recipe = synthesize(
                "generated:video",
                "YouTube Video Recipe",
                "play.rectangle.fill",
                link.thumbnail_url(),
                &items,
                &[
                    "Follow the steps in the video tutorial.",
                    "Prep ingredients as demonstrated.",
                    "Cook until the texture matches the video.",
                    "Serve and enjoy!",
                ],
            );
            (items, Some(recipe))
        }
        LinkKind::Social => {
            let items = items(&[
                ("Fresh Protein", "1 lb"),
                ("Vegetable Medley", "1 bag"),
                ("Aromatic Herbs", "1 bunch"),
                ("Cooking Fat", "2 tbsp"),
            ]);
            let recipe = synthesize(
                "generated:social",
                "Extracted Social Recipe",
                "sparkles",
                Some(SOCIAL_IMAGE_URL.to_string()),
                &items,
                &[
                    "Prep all identified ingredients as shown in the video.",
                    "Follow the creator's specific seasoning rhythm.",
                    "Cook until golden brown and delicious.",
                    "Season once more before serving.",
                ],
            );
            (items, Some(recipe))
        }
        LinkKind::Unrecognized => {
            let items = items(&[
                ("Generic Flour", "1 bag"),
                ("Eggs", "1 carton"),
                ("Milk", "1 gallon"),
            ]);
            (items, None)
        }
    };

    GeneratedList {
        link: link.clone(),
        items,
        recipe,
    }
}

fn items(pairs: &[(&str, &str)]) -> Vec<GroceryItem> {
    pairs
        .iter()
        .map(|(name, quantity)| GroceryItem::new(*name, *quantity))
        .collect()
}

fn synthesize(
    id: &str,
    title: &str,
    icon: &str,
    image_url: Option<String>,
    items: &[GroceryItem],
    steps: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        image_url,
        ingredients: items.iter().map(GroceryItem::ingredient_line).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_link;

    #[test]
    fn test_paneer_template() {
        let list = template_for(&classify_link(
            "https://www.youtube.com/watch?v=paneer-masala-123",
        ));
        assert_eq!(list.items.len(), 9);
        assert_eq!(list.items[0], GroceryItem::new("Paneer", "250g"));

        let recipe = list.recipe.unwrap();
        assert_eq!(recipe.title, "Authentic Paneer Butter Masala");
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://img.youtube.com/vi/paneer-masala-123/hqdefault.jpg")
        );
        assert_eq!(recipe.ingredients.len(), 9);
        assert_eq!(recipe.ingredients[8], "Garam Masala (½ tsp)");
        assert_eq!(recipe.steps.len(), 7);
    }

    #[test]
    fn test_generic_video_template() {
        let list = template_for(&classify_link("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(list.items.len(), 3);
        let recipe = list.recipe.unwrap();
        assert_eq!(recipe.title, "YouTube Video Recipe");
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(recipe.ingredients[0], "Main Ingredient (to taste)");
    }

    #[test]
    fn test_social_template() {
        let list = template_for(&classify_link("https://www.tiktok.com/@eitan/video/recipe123"));
        let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Fresh Protein", "Vegetable Medley", "Aromatic Herbs", "Cooking Fat"]
        );
        let recipe = list.recipe.unwrap();
        assert_eq!(recipe.title, "Extracted Social Recipe");
        assert_eq!(recipe.image_url.as_deref(), Some(SOCIAL_IMAGE_URL));
    }

    #[test]
    fn test_fallback_template() {
        let list = template_for(&classify_link("plain-text-no-url"));
        assert_eq!(
            list.items,
            vec![
                GroceryItem::new("Generic Flour", "1 bag"),
                GroceryItem::new("Eggs", "1 carton"),
                GroceryItem::new("Milk", "1 gallon"),
            ]
        );
        assert!(list.recipe.is_none());
    }

    #[test]
    fn test_every_bucket_is_non_empty() {
        for input in [
            "",
            "   ",
            "plain-text-no-url",
            "https://example.com",
            "https://youtu.be/x",
            "https://youtu.be/masala",
            "https://instagram.com/p/1",
            "v=&&&",
            "😀 emoji only",
        ] {
            let list = template_for(&classify_link(input));
            assert!(!list.items.is_empty(), "empty list for {input:?}");
        }
    }
}
