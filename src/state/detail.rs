use crate::model::Recipe;
use serde::{Deserialize, Serialize};

/// What a finished drag on the detail view resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOutcome {
    /// The drag went far enough down to close the view
    Dismiss,
    /// The view springs back to its resting position
    SnapBack,
}

/// Transient state of an open recipe detail view.
///
/// A fresh value is created each time a recipe is opened, so the ingredient
/// drawer always starts collapsed and the first step highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub recipe: Recipe,
    /// Whether the ingredient drawer is pulled up
    pub drawer_expanded: bool,
    /// Zero-based index of the highlighted instruction
    pub active_step: usize,
    /// Current downward drag translation, never negative
    pub drag_offset: f32,
}

impl DetailView {
    pub fn new(recipe: Recipe) -> Self {
        DetailView {
            recipe,
            drawer_expanded: false,
            active_step: 0,
            drag_offset: 0.0,
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_expanded = !self.drawer_expanded;
    }

    /// Highlights the step at `index`. Out-of-range indices are ignored.
    pub fn set_active_step(&mut self, index: usize) -> bool {
        if index >= self.recipe.steps.len() {
            return false;
        }
        self.active_step = index;
        true
    }

    /// Tracks an in-progress drag. Only downward movement moves the view.
    pub fn drag_changed(&mut self, translation: f32) {
        if translation > 0.0 {
            self.drag_offset = translation;
        }
    }

    /// Resolves a finished drag against the dismiss threshold.
    pub fn drag_ended(&mut self, translation: f32, threshold: f32) -> DragOutcome {
        if translation > threshold {
            DragOutcome::Dismiss
        } else {
            self.drag_offset = 0.0;
            DragOutcome::SnapBack
        }
    }

    /// Label for the drawer handle, e.g. `"7 items"`.
    pub fn ingredient_count_label(&self) -> String {
        format!("{} items", self.recipe.ingredients.len())
    }
}
