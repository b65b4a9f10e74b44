use super::detail::{DetailView, DragOutcome};
use crate::model::Recipe;
use serde::{Deserialize, Serialize};

/// The item currently opened in the detail reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    /// Id of the catalog entry the detail view was opened from
    pub id: String,
    pub detail: DetailView,
}

/// Single-slot selection: either idle or exactly one item is open.
///
/// Selecting while another item is open replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    current: Option<SelectedItem>,
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.current.as_ref().map(|item| item.id.as_str())
    }

    pub fn current(&self) -> Option<&SelectedItem> {
        self.current.as_ref()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.current.as_ref().map(|item| &item.detail)
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailView> {
        self.current.as_mut().map(|item| &mut item.detail)
    }

    /// Opens `recipe` for the entry `id`, closing whatever was open.
    pub fn select(&mut self, id: impl Into<String>, recipe: Recipe) {
        let id = id.into();
        log::debug!("Selecting {id}");
        self.current = Some(SelectedItem {
            id,
            detail: DetailView::new(recipe),
        });
    }

    /// Closes the open item, if any.
    pub fn dismiss(&mut self) -> Option<SelectedItem> {
        let dismissed = self.current.take();
        if let Some(item) = &dismissed {
            log::debug!("Dismissed {}", item.id);
        }
        dismissed
    }

    /// Finishes a drag on the open item, dismissing it past `threshold`.
    pub fn drag_ended(&mut self, translation: f32, threshold: f32) -> Option<DragOutcome> {
        let outcome = self.detail_mut()?.drag_ended(translation, threshold);
        if outcome == DragOutcome::Dismiss {
            self.dismiss();
        }
        Some(outcome)
    }
}
