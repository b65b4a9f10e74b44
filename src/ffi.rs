//! UniFFI bindings for the native shells (iOS, Android).
//!
//! Each screen is exported as an object that owns its view state behind a
//! mutex. The shell forwards user events through the object's methods and
//! re-renders from the returned snapshot records.

use crate::classify::{
    classify_link as classify_link_internal, extract_video_id as extract_video_id_internal,
    LinkClassification, LinkKind,
};
use crate::config::{Settings, SettingsError};
use crate::generate::{CancellationToken, Generator};
use crate::model::{CatalogEntry, OnboardingPage, Recipe};
use crate::preferences::{PreferenceError, PreferenceStore};
use crate::sample::{SampleData, SampleDataError};
use crate::state::{
    AppState, DetailView, GeneratorAction, GeneratorPhase, GeneratorState, LibraryAction,
    LibraryLayout, LibraryState, OnboardingAction, OnboardingState, Screen, SelectedItem, Tab,
    SAMPLE_LINK,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum TavoloError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("Preferences error: {message}")]
    PreferenceError { message: String },

    #[error("State error: {message}")]
    StateError { message: String },
}

impl From<SampleDataError> for TavoloError {
    fn from(e: SampleDataError) -> Self {
        TavoloError::CatalogError {
            message: e.to_string(),
        }
    }
}

impl From<SettingsError> for TavoloError {
    fn from(e: SettingsError) -> Self {
        TavoloError::SettingsError {
            message: e.to_string(),
        }
    }
}

impl From<PreferenceError> for TavoloError {
    fn from(e: PreferenceError) -> Self {
        TavoloError::PreferenceError {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for TavoloError {
    fn from(e: serde_json::Error) -> Self {
        TavoloError::StateError {
            message: e.to_string(),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // State is replaced wholesale by reducers, so a poisoned value is still
    // consistent.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn load_settings(settings_yaml: Option<String>) -> Result<Settings, TavoloError> {
    Ok(match settings_yaml {
        Some(yaml) => Settings::from_yaml_str(&yaml)?,
        None => Settings::default(),
    })
}

// ============================================================================
// Records
// ============================================================================

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    /// Symbol name shown when there is no image
    pub icon: String,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Payload for the share sheet
    pub share_text: String,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id.clone(),
            title: r.title.clone(),
            icon: r.icon.clone(),
            image_url: r.image_url.clone(),
            ingredients: r.ingredients.clone(),
            steps: r.steps.clone(),
            share_text: r.share_text(),
        }
    }
}

/// FFI-safe representation of a cookbook card.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCookbook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub icon: String,
    /// Palette slot, e.g. "sky_blue"
    pub color: String,
    pub height: f32,
    pub tags: Vec<String>,
}

impl From<&CatalogEntry> for FfiCookbook {
    fn from(c: &CatalogEntry) -> Self {
        FfiCookbook {
            id: c.id.clone(),
            title: c.title.clone(),
            author: c.author.clone(),
            icon: c.icon.clone(),
            color: c.color.as_str().to_string(),
            height: c.height,
            tags: c.tags.clone(),
        }
    }
}

/// A recipe card in the filtered grid.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipeCard {
    /// Cookbook to select when the card is tapped
    pub cookbook_id: String,
    pub title: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredientChip {
    pub name: String,
    pub selected: bool,
}

/// FFI-safe representation of an open detail view.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDetail {
    /// Cookbook the view was opened from
    pub entry_id: String,
    pub recipe: FfiRecipe,
    pub drawer_expanded: bool,
    pub active_step: u32,
    pub drag_offset: f32,
    /// Drawer handle label, e.g. "7 items"
    pub ingredient_count_label: String,
}

impl FfiDetail {
    fn new(entry_id: &str, view: &DetailView) -> Self {
        FfiDetail {
            entry_id: entry_id.to_string(),
            recipe: FfiRecipe::from(&view.recipe),
            drawer_expanded: view.drawer_expanded,
            active_step: view.active_step as u32,
            drag_offset: view.drag_offset,
            ingredient_count_label: view.ingredient_count_label(),
        }
    }
}

impl From<&SelectedItem> for FfiDetail {
    fn from(item: &SelectedItem) -> Self {
        FfiDetail::new(&item.id, &item.detail)
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiLibraryLayout {
    Folders,
    RecipeGrid,
}

impl From<LibraryLayout> for FfiLibraryLayout {
    fn from(l: LibraryLayout) -> Self {
        match l {
            LibraryLayout::Folders => FfiLibraryLayout::Folders,
            LibraryLayout::RecipeGrid => FfiLibraryLayout::RecipeGrid,
        }
    }
}

/// Everything the library screen needs to render.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLibrarySnapshot {
    pub search_text: String,
    pub layout: FfiLibraryLayout,
    pub chips: Vec<FfiIngredientChip>,
    /// Folder cards, left column
    pub left_column: Vec<FfiCookbook>,
    /// Folder cards, right column
    pub right_column: Vec<FfiCookbook>,
    /// Recipe cards for the filtered grid
    pub recipe_cards: Vec<FfiRecipeCard>,
    pub show_empty_state: bool,
    pub background_blurred: bool,
    pub detail: Option<FfiDetail>,
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiLinkKind {
    KnownRecipeVideo,
    GenericVideo,
    Social,
    Unrecognized,
}

impl From<LinkKind> for FfiLinkKind {
    fn from(k: LinkKind) -> Self {
        match k {
            LinkKind::KnownRecipeVideo => FfiLinkKind::KnownRecipeVideo,
            LinkKind::GenericVideo => FfiLinkKind::GenericVideo,
            LinkKind::Social => FfiLinkKind::Social,
            LinkKind::Unrecognized => FfiLinkKind::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLinkClassification {
    pub kind: FfiLinkKind,
    pub video_id: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl From<&LinkClassification> for FfiLinkClassification {
    fn from(c: &LinkClassification) -> Self {
        FfiLinkClassification {
            kind: c.kind.into(),
            video_id: c.video_id.clone(),
            thumbnail_url: c.thumbnail_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiGeneratorPhase {
    Idle,
    Processing,
    Ready,
}

impl From<GeneratorPhase> for FfiGeneratorPhase {
    fn from(p: GeneratorPhase) -> Self {
        match p {
            GeneratorPhase::Idle => FfiGeneratorPhase::Idle,
            GeneratorPhase::Processing => FfiGeneratorPhase::Processing,
            GeneratorPhase::Ready => FfiGeneratorPhase::Ready,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiGroceryRow {
    pub name: String,
    pub quantity: String,
    pub checked: bool,
    /// Delay before this row animates in, once revealed
    pub appear_delay_ms: u64,
}

/// Everything the grocery generator screen needs to render.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiGeneratorSnapshot {
    pub url: String,
    pub phase: FfiGeneratorPhase,
    pub can_generate: bool,
    pub can_clear: bool,
    pub rows: Vec<FfiGroceryRow>,
    pub items_revealed: bool,
    pub recipe: Option<FfiRecipe>,
    pub recipe_sheet_open: bool,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOnboardingPage {
    pub title: String,
    pub description: String,
    pub bubbles: Vec<String>,
}

impl From<&OnboardingPage> for FfiOnboardingPage {
    fn from(p: &OnboardingPage) -> Self {
        FfiOnboardingPage {
            title: p.title.clone(),
            description: p.description.clone(),
            bubbles: p.bubbles.clone(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOnboardingSnapshot {
    pub pages: Vec<FfiOnboardingPage>,
    pub page: u32,
    pub revealed: bool,
    pub drag_offset: f32,
    pub shows_swipe_handle: bool,
    pub can_continue: bool,
    pub continue_label: String,
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiTab {
    Library,
    MagicList,
}

impl From<Tab> for FfiTab {
    fn from(t: Tab) -> Self {
        match t {
            Tab::Library => FfiTab::Library,
            Tab::MagicList => FfiTab::MagicList,
        }
    }
}

impl From<FfiTab> for Tab {
    fn from(t: FfiTab) -> Self {
        match t {
            FfiTab::Library => Tab::Library,
            FfiTab::MagicList => Tab::MagicList,
        }
    }
}

/// Top-level screen to present. `tab` is only meaningful once onboarding
/// is complete.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScreen {
    pub onboarding: bool,
    pub tab: FfiTab,
}

// ============================================================================
// Library screen
// ============================================================================

/// The cookbook library screen.
#[derive(uniffi::Object)]
pub struct FfiLibrary {
    data: SampleData,
    settings: Settings,
    state: Mutex<LibraryState>,
}

impl FfiLibrary {
    fn dispatch(&self, action: LibraryAction) -> FfiLibrarySnapshot {
        let mut state = lock(&self.state);
        state.reduce(action, &self.data, &self.settings);
        self.snapshot_of(&state)
    }

    fn snapshot_of(&self, state: &LibraryState) -> FfiLibrarySnapshot {
        let [left, right] = state.folder_columns(&self.data);
        let recipe_cards = state
            .recipe_cards(&self.data)
            .into_iter()
            .map(|(cookbook, recipe)| FfiRecipeCard {
                cookbook_id: cookbook.id.clone(),
                title: recipe.title,
                icon: recipe.icon,
                color: cookbook.color.as_str().to_string(),
            })
            .collect();

        FfiLibrarySnapshot {
            search_text: state.search_text.clone(),
            layout: state.layout().into(),
            chips: state
                .chips(&self.data)
                .into_iter()
                .map(|c| FfiIngredientChip {
                    name: c.name,
                    selected: c.selected,
                })
                .collect(),
            left_column: left.into_iter().map(FfiCookbook::from).collect(),
            right_column: right.into_iter().map(FfiCookbook::from).collect(),
            recipe_cards,
            show_empty_state: state.show_empty_state(&self.data),
            background_blurred: state.is_background_blurred(),
            detail: state.selection.current().map(FfiDetail::from),
        }
    }
}

#[uniffi::export]
impl FfiLibrary {
    /// Creates the library over the bundled catalog.
    ///
    /// # Arguments
    /// * `settings_yaml` - Optional YAML overrides for timings and thresholds
    #[uniffi::constructor]
    pub fn new(settings_yaml: Option<String>) -> Result<Arc<Self>, TavoloError> {
        Ok(Arc::new(FfiLibrary {
            data: SampleData::bundled()?,
            settings: load_settings(settings_yaml)?,
            state: Mutex::new(LibraryState::new()),
        }))
    }

    pub fn snapshot(&self) -> FfiLibrarySnapshot {
        let state = lock(&self.state);
        self.snapshot_of(&state)
    }

    pub fn search_text_changed(&self, text: String) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::SearchTextChanged(text))
    }

    pub fn submit_search(&self) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::SubmitSearch)
    }

    pub fn add_ingredient(&self, ingredient: String) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::AddIngredient(ingredient))
    }

    pub fn remove_ingredient(&self, ingredient: String) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::RemoveIngredient(ingredient))
    }

    pub fn clear_ingredients(&self) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::ClearIngredients)
    }

    pub fn select_cookbook(&self, id: String) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::SelectCookbook(id))
    }

    pub fn dismiss(&self) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::Dismiss)
    }

    pub fn drag_changed(&self, translation: f32) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::DragChanged(translation))
    }

    pub fn drag_ended(&self, translation: f32) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::DragEnded(translation))
    }

    pub fn toggle_drawer(&self) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::ToggleDrawer)
    }

    pub fn set_active_step(&self, index: u32) -> FfiLibrarySnapshot {
        self.dispatch(LibraryAction::SetActiveStep(index as usize))
    }

    /// Serializes the view state to JSON, e.g. for state restoration.
    pub fn state_json(&self) -> Result<String, TavoloError> {
        Ok(serde_json::to_string(&*lock(&self.state))?)
    }

    /// Replaces the view state with one produced by `state_json`.
    pub fn restore_state(&self, json: String) -> Result<FfiLibrarySnapshot, TavoloError> {
        let restored: LibraryState = serde_json::from_str(&json)?;
        let mut state = lock(&self.state);
        *state = restored;
        Ok(self.snapshot_of(&state))
    }
}

// ============================================================================
// Grocery generator screen
// ============================================================================

/// The "Magic List" grocery generator screen.
#[derive(uniffi::Object)]
pub struct FfiGroceryGenerator {
    generator: Generator,
    settings: Settings,
    state: Mutex<GeneratorState>,
    /// Token of the run in flight
    token: Mutex<Option<CancellationToken>>,
}

impl FfiGroceryGenerator {
    fn dispatch(&self, action: GeneratorAction) -> FfiGeneratorSnapshot {
        let mut state = lock(&self.state);
        state.reduce(action);
        self.snapshot_of(&state)
    }

    fn snapshot_of(&self, state: &GeneratorState) -> FfiGeneratorSnapshot {
        let delays = state.row_delays(&self.settings);
        FfiGeneratorSnapshot {
            url: state.url.clone(),
            phase: state.phase.into(),
            can_generate: state.can_generate(),
            can_clear: state.can_clear(),
            rows: state
                .rows
                .iter()
                .zip(delays)
                .map(|(row, delay)| FfiGroceryRow {
                    name: row.item.name.clone(),
                    quantity: row.item.quantity.clone(),
                    checked: row.checked,
                    appear_delay_ms: delay.as_millis() as u64,
                })
                .collect(),
            items_revealed: state.items_revealed,
            recipe: state.recipe.as_ref().map(FfiRecipe::from),
            recipe_sheet_open: state.recipe_sheet_open,
        }
    }
}

#[uniffi::export]
impl FfiGroceryGenerator {
    /// Creates the screen with the mock ingredient extractor.
    ///
    /// # Arguments
    /// * `settings_yaml` - Optional YAML overrides for timings and thresholds
    #[uniffi::constructor]
    pub fn new(settings_yaml: Option<String>) -> Result<Arc<Self>, TavoloError> {
        let settings = load_settings(settings_yaml)?;
        Ok(Arc::new(FfiGroceryGenerator {
            generator: Generator::mock(&settings),
            settings,
            state: Mutex::new(GeneratorState::new()),
            token: Mutex::new(None),
        }))
    }

    pub fn snapshot(&self) -> FfiGeneratorSnapshot {
        let state = lock(&self.state);
        self.snapshot_of(&state)
    }

    pub fn set_url(&self, url: String) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::UrlChanged(url))
    }

    pub fn use_sample_link(&self) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::UseSampleLink)
    }

    pub fn toggle_item(&self, index: u32) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::ToggleItem(index as usize))
    }

    pub fn open_recipe(&self) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::OpenRecipe)
    }

    pub fn close_recipe(&self) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::CloseRecipe)
    }

    pub fn clear_all(&self) -> FfiGeneratorSnapshot {
        self.dispatch(GeneratorAction::ClearAll)
    }

    /// Cancels the run in flight, if any. Call when the screen goes away.
    pub fn cancel(&self) {
        // Serialized with `generate` installing the token of a new run.
        let _state = lock(&self.state);
        if let Some(token) = lock(&self.token).take() {
            token.cancel();
        }
    }

    /// Serializes the view state to JSON.
    pub fn state_json(&self) -> Result<String, TavoloError> {
        Ok(serde_json::to_string(&*lock(&self.state))?)
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl FfiGroceryGenerator {
    /// Generates a grocery list for the current link.
    ///
    /// Returns immediately with `false` if generation is not possible (no
    /// link, or a run already in flight). Otherwise the screen moves through
    /// processing, ready and revealed while this call is pending; poll
    /// `snapshot` to render. Returns `true` when the list was revealed and
    /// `false` if the run was cancelled.
    pub async fn generate(&self) -> bool {
        let token = CancellationToken::new();
        let (run, url) = {
            let mut state = lock(&self.state);
            let Some(run) = state.start() else {
                return false;
            };
            if let Some(previous) = lock(&self.token).replace(token.clone()) {
                previous.cancel();
            }
            (run, state.pending_url().unwrap_or_default().to_string())
        };

        let result = self
            .generator
            .run(run, &url, &token, |action| lock(&self.state).reduce(action))
            .await;
        result.is_ok()
    }
}

// ============================================================================
// App shell and onboarding
// ============================================================================

/// Root navigation plus the onboarding carousel.
#[derive(uniffi::Object)]
pub struct FfiApp {
    settings: Settings,
    pages: Vec<OnboardingPage>,
    preferences: Mutex<PreferenceStore>,
    state: Mutex<AppState>,
    onboarding: Mutex<OnboardingState>,
}

impl FfiApp {
    fn onboarding_snapshot_of(&self, state: &OnboardingState) -> FfiOnboardingSnapshot {
        FfiOnboardingSnapshot {
            pages: self.pages.iter().map(FfiOnboardingPage::from).collect(),
            page: state.page as u32,
            revealed: state.revealed,
            drag_offset: state.drag_offset,
            shows_swipe_handle: state.shows_swipe_handle(),
            can_continue: state.can_continue(),
            continue_label: state.continue_label().to_string(),
        }
    }

    fn dispatch_onboarding(&self, action: OnboardingAction) -> Result<FfiOnboardingSnapshot, TavoloError> {
        let mut onboarding = lock(&self.onboarding);
        let before = onboarding.clone();
        if onboarding.reduce(action, &self.settings) {
            let mut preferences = lock(&self.preferences);
            if let Err(e) = lock(&self.state).complete_onboarding(&mut preferences) {
                log::warn!("Could not persist onboarding completion: {e}");
                *onboarding = before;
                return Err(e.into());
            }
        }
        Ok(self.onboarding_snapshot_of(&onboarding))
    }
}

#[uniffi::export]
impl FfiApp {
    /// Opens the app state.
    ///
    /// # Arguments
    /// * `preferences_path` - JSON file holding persisted preferences
    /// * `settings_yaml` - Optional YAML overrides for timings and thresholds
    #[uniffi::constructor]
    pub fn new(
        preferences_path: String,
        settings_yaml: Option<String>,
    ) -> Result<Arc<Self>, TavoloError> {
        let settings = load_settings(settings_yaml)?;
        let pages = SampleData::bundled()?.onboarding;
        let preferences = PreferenceStore::open_or_default(preferences_path);
        let state = AppState::from_preferences(&preferences);

        Ok(Arc::new(FfiApp {
            settings,
            onboarding: Mutex::new(OnboardingState::new(pages.len())),
            pages,
            preferences: Mutex::new(preferences),
            state: Mutex::new(state),
        }))
    }

    pub fn screen(&self) -> FfiScreen {
        let state = lock(&self.state);
        match state.screen() {
            Screen::Onboarding => FfiScreen {
                onboarding: true,
                tab: state.tab.into(),
            },
            Screen::Tabs(tab) => FfiScreen {
                onboarding: false,
                tab: tab.into(),
            },
        }
    }

    pub fn select_tab(&self, tab: FfiTab) -> FfiScreen {
        lock(&self.state).select_tab(tab.into());
        self.screen()
    }

    pub fn onboarding_snapshot(&self) -> FfiOnboardingSnapshot {
        let onboarding = lock(&self.onboarding);
        self.onboarding_snapshot_of(&onboarding)
    }

    pub fn onboarding_swipe_changed(&self, translation: f32) -> Result<FfiOnboardingSnapshot, TavoloError> {
        self.dispatch_onboarding(OnboardingAction::SwipeChanged(translation))
    }

    pub fn onboarding_swipe_ended(&self, predicted_end: f32) -> Result<FfiOnboardingSnapshot, TavoloError> {
        self.dispatch_onboarding(OnboardingAction::SwipeEnded(predicted_end))
    }

    pub fn onboarding_page_changed(&self, page: u32) -> Result<FfiOnboardingSnapshot, TavoloError> {
        self.dispatch_onboarding(OnboardingAction::PageChanged(page as usize))
    }

    /// The "Continue" / "Start Cooking" button. Completing the last page
    /// persists the onboarding flag.
    pub fn onboarding_continue(&self) -> Result<FfiOnboardingSnapshot, TavoloError> {
        self.dispatch_onboarding(OnboardingAction::Continue)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Classifies a pasted link.
///
/// # Arguments
/// * `url` - Free text, usually a link
///
/// # Returns
/// The outcome bucket, video id and thumbnail if any. Never fails.
#[uniffi::export]
pub fn classify_link(url: String) -> FfiLinkClassification {
    FfiLinkClassification::from(&classify_link_internal(&url))
}

/// Extracts a video id from a link, if it has one.
#[uniffi::export]
pub fn extract_video_id(url: String) -> Option<String> {
    extract_video_id_internal(&url)
}

/// Returns every cookbook in the bundled catalog.
#[uniffi::export]
pub fn cookbooks() -> Result<Vec<FfiCookbook>, TavoloError> {
    let data = SampleData::bundled()?;
    Ok(data.cookbooks.iter().map(FfiCookbook::from).collect())
}

/// Link used by the "Try sample link" chip.
#[uniffi::export]
pub fn sample_link() -> String {
    SAMPLE_LINK.to_string()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
