use crate::preferences::{PreferenceError, PreferenceStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Library,
    MagicList,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Library => "Library",
            Tab::MagicList => "Magic List",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Library => "book.fill",
            Tab::MagicList => "wand.and.stars",
        }
    }
}

/// Top-level screen the shell should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Onboarding,
    Tabs(Tab),
}

/// Root navigation state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub onboarding_complete: bool,
    pub tab: Tab,
}

impl AppState {
    pub fn from_preferences(store: &PreferenceStore) -> Self {
        AppState {
            onboarding_complete: store.onboarding_complete(),
            tab: Tab::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.onboarding_complete {
            Screen::Tabs(self.tab)
        } else {
            Screen::Onboarding
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Marks onboarding as done and persists the flag.
    pub fn complete_onboarding(&mut self, store: &mut PreferenceStore) -> Result<(), PreferenceError> {
        store.set_onboarding_complete(true)?;
        self.onboarding_complete = true;
        Ok(())
    }
}
