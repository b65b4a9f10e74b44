use super::detail::DragOutcome;
use super::selection::Selection;
use crate::config::Settings;
use crate::filter::IngredientFilter;
use crate::model::{CatalogEntry, Recipe};
use crate::sample::SampleData;
use serde::{Deserialize, Serialize};

/// User events on the library screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LibraryAction {
    /// The ingredient search field was edited
    SearchTextChanged(String),
    /// The search field was submitted; its text becomes a selected chip
    SubmitSearch,
    /// A suggested chip was tapped
    AddIngredient(String),
    /// A selected chip was tapped
    RemoveIngredient(String),
    ClearIngredients,
    /// A cookbook card was tapped
    SelectCookbook(String),
    /// The close button of the detail view
    Dismiss,
    DragChanged(f32),
    DragEnded(f32),
    ToggleDrawer,
    SetActiveStep(usize),
}

/// How the cookbook area is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryLayout {
    /// Two staggered columns of folder cards
    Folders,
    /// A grid of recipe cards for the filtered cookbooks
    RecipeGrid,
}

/// A chip in the ingredient row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientChip {
    pub name: String,
    pub selected: bool,
}

/// View state of the library screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryState {
    pub search_text: String,
    pub filter: IngredientFilter,
    pub selection: Selection,
}

impl LibraryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a user event.
    pub fn reduce(&mut self, action: LibraryAction, data: &SampleData, settings: &Settings) {
        log::debug!("Library action: {action:?}");
        match action {
            LibraryAction::SearchTextChanged(text) => self.search_text = text,
            LibraryAction::SubmitSearch => {
                if !self.search_text.is_empty() {
                    self.filter.insert(&self.search_text);
                    self.search_text.clear();
                }
            }
            LibraryAction::AddIngredient(ingredient) => {
                self.filter.insert(&ingredient);
            }
            LibraryAction::RemoveIngredient(ingredient) => {
                self.filter.remove(&ingredient);
            }
            LibraryAction::ClearIngredients => self.filter.clear(),
            LibraryAction::SelectCookbook(id) => match data.cookbook(&id) {
                Some(cookbook) => self.selection.select(id, data.recipe_for(cookbook)),
                None => log::warn!("Ignoring selection of unknown cookbook {id}"),
            },
            LibraryAction::Dismiss => {
                self.selection.dismiss();
            }
            LibraryAction::DragChanged(translation) => {
                if let Some(detail) = self.selection.detail_mut() {
                    detail.drag_changed(translation);
                }
            }
            LibraryAction::DragEnded(translation) => {
                if let Some(DragOutcome::Dismiss) = self
                    .selection
                    .drag_ended(translation, settings.dismiss_threshold)
                {
                    log::debug!("Detail view dismissed by drag");
                }
            }
            LibraryAction::ToggleDrawer => {
                if let Some(detail) = self.selection.detail_mut() {
                    detail.toggle_drawer();
                }
            }
            LibraryAction::SetActiveStep(index) => {
                if let Some(detail) = self.selection.detail_mut() {
                    detail.set_active_step(index);
                }
            }
        }
    }

    pub fn layout(&self) -> LibraryLayout {
        if self.filter.is_empty() {
            LibraryLayout::Folders
        } else {
            LibraryLayout::RecipeGrid
        }
    }

    /// Cookbooks passing the ingredient filter, in catalog order.
    pub fn visible_cookbooks<'a>(&self, data: &'a SampleData) -> Vec<&'a CatalogEntry> {
        self.filter.apply(&data.cookbooks)
    }

    /// Cookbooks split into the two folder columns: even positions on the
    /// left, odd on the right.
    pub fn folder_columns<'a>(&self, data: &'a SampleData) -> [Vec<&'a CatalogEntry>; 2] {
        let mut columns = [Vec::new(), Vec::new()];
        for (index, cookbook) in data.cookbooks.iter().enumerate() {
            columns[index % 2].push(cookbook);
        }
        columns
    }

    /// Recipe cards for the filtered grid.
    pub fn recipe_cards<'a>(&self, data: &'a SampleData) -> Vec<(&'a CatalogEntry, Recipe)> {
        self.visible_cookbooks(data)
            .into_iter()
            .map(|cookbook| (cookbook, data.recipe_for(cookbook)))
            .collect()
    }

    /// Chips to show: suggestions while nothing is selected, otherwise the
    /// selection in sorted order.
    pub fn chips(&self, data: &SampleData) -> Vec<IngredientChip> {
        if self.filter.is_empty() {
            data.suggested_ingredients
                .iter()
                .map(|name| IngredientChip {
                    name: name.clone(),
                    selected: false,
                })
                .collect()
        } else {
            self.filter
                .selected()
                .map(|name| IngredientChip {
                    name: name.to_string(),
                    selected: true,
                })
                .collect()
        }
    }

    pub fn show_empty_state(&self, data: &SampleData) -> bool {
        self.visible_cookbooks(data).is_empty()
    }

    /// The cookbook grid is blurred behind an open detail view.
    pub fn is_background_blurred(&self) -> bool {
        !self.selection.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (LibraryState, SampleData, Settings) {
        (
            LibraryState::new(),
            SampleData::bundled().unwrap(),
            Settings::default(),
        )
    }

    #[test]
    fn test_initial_state() {
        let (state, data, _) = setup();
        assert_eq!(state.layout(), LibraryLayout::Folders);
        assert_eq!(state.visible_cookbooks(&data).len(), 6);
        assert!(!state.show_empty_state(&data));
        assert!(!state.is_background_blurred());

        let chips = state.chips(&data);
        assert_eq!(chips.len(), 5);
        assert!(chips.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_submit_search_adds_trimmed_chip() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::SearchTextChanged("  Pasta ".to_string()),
            &data,
            &settings,
        );
        state.reduce(LibraryAction::SubmitSearch, &data, &settings);

        assert!(state.search_text.is_empty());
        assert!(state.filter.contains("Pasta"));
        assert_eq!(state.layout(), LibraryLayout::RecipeGrid);

        let chips = state.chips(&data);
        assert_eq!(
            chips,
            vec![IngredientChip {
                name: "Pasta".to_string(),
                selected: true
            }]
        );
    }

    #[test]
    fn test_submit_empty_search_is_ignored() {
        let (mut state, data, settings) = setup();
        state.reduce(LibraryAction::SubmitSearch, &data, &settings);
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_chip_toggling_and_empty_state() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::AddIngredient("Saffron".to_string()),
            &data,
            &settings,
        );
        assert!(state.show_empty_state(&data));

        state.reduce(
            LibraryAction::RemoveIngredient("Saffron".to_string()),
            &data,
            &settings,
        );
        assert!(!state.show_empty_state(&data));
        assert_eq!(state.layout(), LibraryLayout::Folders);
    }

    #[test]
    fn test_recipe_cards() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::AddIngredient("Onion".to_string()),
            &data,
            &settings,
        );

        let cards = state.recipe_cards(&data);
        let titles: Vec<&str> = cards.iter().map(|(_, r)| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Cheesy Chicken & Potato Casserole", "Creme's Code Prototypes"]
        );
    }

    #[test]
    fn test_folder_columns() {
        let (state, data, _) = setup();
        let [left, right] = state.folder_columns(&data);
        let left: Vec<&str> = left.iter().map(|c| c.title.as_str()).collect();
        let right: Vec<&str> = right.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(left, vec!["Signature Dishes", "Code Prototypes", "Whop"]);
        assert_eq!(right, vec!["New Features", "Top Design Studios", "Vercel"]);
    }

    #[test]
    fn test_select_then_select_other() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::SelectCookbook("signature-dishes".to_string()),
            &data,
            &settings,
        );
        state.reduce(LibraryAction::ToggleDrawer, &data, &settings);
        state.reduce(
            LibraryAction::SelectCookbook("whop".to_string()),
            &data,
            &settings,
        );

        assert_eq!(state.selection.selected_id(), Some("whop"));
        let detail = state.selection.detail().unwrap();
        assert_eq!(detail.recipe.title, "Creme's Whop");
        assert!(!detail.drawer_expanded);
        assert!(state.is_background_blurred());
    }

    #[test]
    fn test_select_unknown_cookbook() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::SelectCookbook("nope".to_string()),
            &data,
            &settings,
        );
        assert!(state.selection.is_idle());
    }

    #[test]
    fn test_dismiss_by_close_and_drag() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::SelectCookbook("vercel".to_string()),
            &data,
            &settings,
        );
        state.reduce(LibraryAction::Dismiss, &data, &settings);
        assert!(state.selection.is_idle());

        state.reduce(
            LibraryAction::SelectCookbook("vercel".to_string()),
            &data,
            &settings,
        );
        state.reduce(LibraryAction::DragChanged(60.0), &data, &settings);
        state.reduce(LibraryAction::DragEnded(60.0), &data, &settings);
        assert_eq!(state.selection.selected_id(), Some("vercel"));
        assert_eq!(state.selection.detail().unwrap().drag_offset, 0.0);

        state.reduce(LibraryAction::DragEnded(140.0), &data, &settings);
        assert!(state.selection.is_idle());
    }

    #[test]
    fn test_detail_actions_while_idle_are_noops() {
        let (mut state, data, settings) = setup();
        let before = state.clone();
        state.reduce(LibraryAction::ToggleDrawer, &data, &settings);
        state.reduce(LibraryAction::SetActiveStep(3), &data, &settings);
        state.reduce(LibraryAction::DragEnded(500.0), &data, &settings);
        assert_eq!(state, before);
    }

    #[test]
    fn test_state_serializes() {
        let (mut state, data, settings) = setup();
        state.reduce(
            LibraryAction::AddIngredient("Chicken".to_string()),
            &data,
            &settings,
        );
        state.reduce(
            LibraryAction::SelectCookbook("top-design-studios".to_string()),
            &data,
            &settings,
        );

        let json = serde_json::to_string(&state).unwrap();
        let restored: LibraryState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
