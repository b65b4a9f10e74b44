use serde::{Deserialize, Serialize};

/// A single page of the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPage {
    pub title: String,
    pub description: String,
    /// Symbol names floating on the page
    pub bubbles: Vec<String>,
}
