use crate::config::Settings;
use crate::generate::GeneratedList;
use crate::model::{GroceryItem, Recipe};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Link filled in by the "Try sample link" chip.
pub const SAMPLE_LINK: &str = "https://www.tiktok.com/@eitan/video/recipe123";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorPhase {
    /// Nothing generated yet, or results were cleared
    #[default]
    Idle,
    /// A link is being analyzed
    Processing,
    /// A list is available
    Ready,
}

/// Events on the grocery generator screen.
///
/// `Completed`, `Reveal` and `Cancelled` are emitted by
/// [`Generator::run`](crate::generate::Generator::run) and carry the run
/// number they belong to; events from an outdated run are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneratorAction {
    UrlChanged(String),
    UseSampleLink,
    /// The "Generate List" button
    Start,
    Completed { run: u64, list: GeneratedList },
    Reveal { run: u64 },
    Cancelled { run: u64 },
    ToggleItem(usize),
    OpenRecipe,
    CloseRecipe,
    ClearAll,
}

/// A grocery list row and its check mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryRow {
    pub item: GroceryItem,
    pub checked: bool,
}

/// View state of the grocery generator screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Contents of the link field
    pub url: String,
    pub phase: GeneratorPhase,
    pub rows: Vec<GroceryRow>,
    pub recipe: Option<Recipe>,
    /// Rows animate in once this is set
    pub items_revealed: bool,
    pub recipe_sheet_open: bool,
    /// Number of the latest run started on this screen
    run: u64,
    /// Link captured when the latest run started
    pending_url: Option<String>,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generate button is enabled only with a link and no run in flight.
    pub fn can_generate(&self) -> bool {
        !self.url.is_empty() && self.phase != GeneratorPhase::Processing
    }

    pub fn is_processing(&self) -> bool {
        self.phase == GeneratorPhase::Processing
    }

    /// Number of the latest run.
    pub fn current_run(&self) -> u64 {
        self.run
    }

    /// Link the in-flight run is analyzing.
    pub fn pending_url(&self) -> Option<&str> {
        self.pending_url.as_deref()
    }

    /// Enters processing and returns the new run number, or `None` if
    /// generation is not possible right now.
    pub fn start(&mut self) -> Option<u64> {
        if !self.can_generate() {
            log::debug!("Ignoring generate request (phase {:?})", self.phase);
            return None;
        }

        self.run += 1;
        self.phase = GeneratorPhase::Processing;
        self.rows.clear();
        self.recipe = None;
        self.items_revealed = false;
        self.recipe_sheet_open = false;
        self.pending_url = Some(self.url.clone());
        Some(self.run)
    }

    /// Applies an event.
    pub fn reduce(&mut self, action: GeneratorAction) {
        match action {
            GeneratorAction::UrlChanged(url) => self.url = url,
            GeneratorAction::UseSampleLink => self.url = SAMPLE_LINK.to_string(),
            GeneratorAction::Start => {
                self.start();
            }
            GeneratorAction::Completed { run, list } => {
                if !self.accepts(run) {
                    return;
                }
                self.phase = GeneratorPhase::Ready;
                self.rows = list
                    .items
                    .into_iter()
                    .map(|item| GroceryRow {
                        item,
                        checked: false,
                    })
                    .collect();
                self.recipe = list.recipe;
                self.pending_url = None;
            }
            GeneratorAction::Reveal { run } => {
                if run == self.run && self.phase == GeneratorPhase::Ready {
                    self.items_revealed = true;
                }
            }
            GeneratorAction::Cancelled { run } => {
                if run != self.run {
                    return;
                }
                match self.phase {
                    GeneratorPhase::Processing => {
                        self.phase = GeneratorPhase::Idle;
                        self.pending_url = None;
                    }
                    // Rows already landed; show them without waiting for the
                    // reveal that will never come.
                    GeneratorPhase::Ready => self.items_revealed = true,
                    GeneratorPhase::Idle => {}
                }
            }
            GeneratorAction::ToggleItem(index) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.checked = !row.checked;
                }
            }
            GeneratorAction::OpenRecipe => {
                if self.recipe.is_some() {
                    self.recipe_sheet_open = true;
                }
            }
            GeneratorAction::CloseRecipe => self.recipe_sheet_open = false,
            GeneratorAction::ClearAll => {
                if self.is_processing() {
                    return;
                }
                self.url.clear();
                self.rows.clear();
                self.recipe = None;
                self.items_revealed = false;
                self.recipe_sheet_open = false;
                self.phase = GeneratorPhase::Idle;
            }
        }
    }

    fn accepts(&self, run: u64) -> bool {
        let current = run == self.run && self.phase == GeneratorPhase::Processing;
        if !current {
            log::debug!("Dropping result of stale run {run} (current {})", self.run);
        }
        current
    }

    /// The "Clear All" control is only offered once there is a list.
    pub fn can_clear(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Appearance delay of each row once revealed.
    pub fn row_delays(&self, settings: &Settings) -> Vec<Duration> {
        (0..self.rows.len())
            .map(|index| settings.stagger_delay(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_link;
    use crate::generate::template_for;

    fn list_for(url: &str) -> GeneratedList {
        template_for(&classify_link(url))
    }

    #[test]
    fn test_cannot_generate_without_link() {
        let mut state = GeneratorState::new();
        assert!(!state.can_generate());
        assert_eq!(state.start(), None);
        assert_eq!(state.phase, GeneratorPhase::Idle);
    }

    #[test]
    fn test_sample_link() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UseSampleLink);
        assert_eq!(state.url, SAMPLE_LINK);
        assert!(state.can_generate());
    }

    #[test]
    fn test_full_flow() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged(
            "https://www.youtube.com/watch?v=paneer-masala-123".to_string(),
        ));

        let run = state.start().unwrap();
        assert!(state.is_processing());
        assert!(!state.can_generate());
        assert_eq!(state.start(), None);

        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for("https://www.youtube.com/watch?v=paneer-masala-123"),
        });
        assert_eq!(state.phase, GeneratorPhase::Ready);
        assert_eq!(state.rows.len(), 9);
        assert!(!state.items_revealed);
        assert!(state.can_clear());

        state.reduce(GeneratorAction::Reveal { run });
        assert!(state.items_revealed);
        assert_eq!(
            state.recipe.as_ref().unwrap().title,
            "Authentic Paneer Butter Masala"
        );
    }

    #[test]
    fn test_start_clears_previous_results() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("plain".to_string()));
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for("plain"),
        });
        state.reduce(GeneratorAction::ToggleItem(0));

        let next = state.start().unwrap();
        assert_eq!(next, run + 1);
        assert!(state.rows.is_empty());
        assert!(state.recipe.is_none());
        assert!(!state.items_revealed);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("https://youtu.be/a".to_string()));
        let first = state.start().unwrap();
        state.reduce(GeneratorAction::Cancelled { run: first });
        let second = state.start().unwrap();

        state.reduce(GeneratorAction::Completed {
            run: first,
            list: list_for("https://youtu.be/a"),
        });
        assert!(state.is_processing());
        assert!(state.rows.is_empty());

        state.reduce(GeneratorAction::Completed {
            run: second,
            list: list_for("https://youtu.be/a"),
        });
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn test_cancel_while_processing_returns_to_idle() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("x".to_string()));
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Cancelled { run });

        assert_eq!(state.phase, GeneratorPhase::Idle);
        assert!(state.rows.is_empty());
        assert!(state.pending_url().is_none());
        assert!(state.can_generate());
    }

    #[test]
    fn test_cancel_after_completion_reveals() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("x".to_string()));
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for("x"),
        });
        state.reduce(GeneratorAction::Cancelled { run });

        assert_eq!(state.phase, GeneratorPhase::Ready);
        assert!(state.items_revealed);
    }

    #[test]
    fn test_toggle_rows_independently() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("https://instagram.com/p/1".to_string()));
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for("https://instagram.com/p/1"),
        });

        state.reduce(GeneratorAction::ToggleItem(1));
        state.reduce(GeneratorAction::ToggleItem(3));
        state.reduce(GeneratorAction::ToggleItem(3));
        state.reduce(GeneratorAction::ToggleItem(42));

        let checked: Vec<bool> = state.rows.iter().map(|r| r.checked).collect();
        assert_eq!(checked, vec![false, true, false, false]);
    }

    #[test]
    fn test_recipe_sheet() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::OpenRecipe);
        assert!(!state.recipe_sheet_open);

        state.reduce(GeneratorAction::UseSampleLink);
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for(SAMPLE_LINK),
        });
        state.reduce(GeneratorAction::OpenRecipe);
        assert!(state.recipe_sheet_open);

        state.reduce(GeneratorAction::CloseRecipe);
        assert!(!state.recipe_sheet_open);
        assert!(state.recipe.is_some());
    }

    #[test]
    fn test_clear_all() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UseSampleLink);
        let run = state.start().unwrap();

        state.reduce(GeneratorAction::ClearAll);
        assert!(state.is_processing());

        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for(SAMPLE_LINK),
        });
        state.reduce(GeneratorAction::ClearAll);

        assert!(state.url.is_empty());
        assert!(state.rows.is_empty());
        assert!(state.recipe.is_none());
        assert_eq!(state.phase, GeneratorPhase::Idle);
        assert!(!state.can_clear());
    }

    #[test]
    fn test_row_delays() {
        let mut state = GeneratorState::new();
        state.reduce(GeneratorAction::UrlChanged("plain".to_string()));
        let run = state.start().unwrap();
        state.reduce(GeneratorAction::Completed {
            run,
            list: list_for("plain"),
        });

        let delays = state.row_delays(&Settings::default());
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(70),
                Duration::from_millis(140)
            ]
        );
    }
}
