//! View state for every screen.
//!
//! Each screen keeps an explicit, serializable state struct that changes
//! only through its `reduce` method. The native shell renders from these
//! values and forwards user events as actions, so the whole UI flow can be
//! exercised without a UI host.

mod app;
mod detail;
mod generator;
mod library;
mod onboarding;
mod selection;

pub use app::{AppState, Screen, Tab};
pub use detail::{DetailView, DragOutcome};
pub use generator::{GeneratorAction, GeneratorPhase, GeneratorState, GroceryRow, SAMPLE_LINK};
pub use library::{IngredientChip, LibraryAction, LibraryLayout, LibraryState};
pub use onboarding::{OnboardingAction, OnboardingState};
pub use selection::{SelectedItem, Selection};
