use super::Recipe;

impl Recipe {
    /// Plain-text payload handed to the native share sheet.
    pub fn share_text(&self) -> String {
        let mut text = format!("Check out this recipe for {} on Tavolo!\n\n", self.title);

        text.push_str("🛒 INGREDIENTS:\n");
        for ingredient in &self.ingredients {
            text.push_str(&format!("• {ingredient}\n"));
        }

        text.push_str("\n👨‍🍳 INSTRUCTIONS:\n");
        for (index, step) in self.steps.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", index + 1, step));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_share_text() {
        let recipe = Recipe {
            id: "pasta".to_string(),
            title: "Creamy Chicken Pasta".to_string(),
            icon: "fork.knife".to_string(),
            image_url: None,
            ingredients: vec!["Pasta".to_string(), "Garlic".to_string()],
            steps: vec!["Boil the pasta.".to_string(), "Serve hot.".to_string()],
        };

        let expected = indoc! {"
            Check out this recipe for Creamy Chicken Pasta on Tavolo!

            🛒 INGREDIENTS:
            • Pasta
            • Garlic

            👨‍🍳 INSTRUCTIONS:
            1. Boil the pasta.
            2. Serve hot.
        "};
        assert_eq!(recipe.share_text(), expected);
    }

    #[test]
    fn test_share_text_empty_recipe() {
        let recipe = Recipe {
            id: "empty".to_string(),
            title: "Nothing".to_string(),
            icon: "sparkles".to_string(),
            image_url: None,
            ingredients: vec![],
            steps: vec![],
        };
        assert_eq!(
            recipe.share_text(),
            "Check out this recipe for Nothing on Tavolo!\n\n🛒 INGREDIENTS:\n\n👨‍🍳 INSTRUCTIONS:\n"
        );
    }
}
