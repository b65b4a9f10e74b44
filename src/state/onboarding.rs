use crate::config::Settings;
use serde::{Deserialize, Serialize};

/// Gestures and taps on the onboarding carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OnboardingAction {
    /// Vertical translation of the swipe-up handle, negative is up
    SwipeChanged(f32),
    /// The swipe finished with this predicted end translation
    SwipeEnded(f32),
    /// The user paged the carousel sideways
    PageChanged(usize),
    /// The "Continue" / "Start Cooking" button
    Continue,
}

/// View state of the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub page: usize,
    pub page_count: usize,
    /// The first page has been swiped open
    pub revealed: bool,
    /// Current upward translation of the swipe handle, never positive
    pub drag_offset: f32,
    pub complete: bool,
}

impl OnboardingState {
    pub fn new(page_count: usize) -> Self {
        OnboardingState {
            page: 0,
            page_count,
            revealed: false,
            drag_offset: 0.0,
            complete: false,
        }
    }

    fn last_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// The continue button appears once the first page is revealed or the
    /// user has paged past it.
    pub fn can_continue(&self) -> bool {
        !self.complete && (self.revealed || self.page > 0)
    }

    /// The swipe handle only lives on the unrevealed first page.
    pub fn shows_swipe_handle(&self) -> bool {
        self.page == 0 && !self.revealed
    }

    pub fn continue_label(&self) -> &'static str {
        if self.page >= self.last_page() {
            "Start Cooking"
        } else {
            "Continue"
        }
    }

    /// Applies an event. Returns true when this event finished onboarding.
    pub fn reduce(&mut self, action: OnboardingAction, settings: &Settings) -> bool {
        if self.complete {
            return false;
        }

        match action {
            OnboardingAction::SwipeChanged(translation) => {
                if self.shows_swipe_handle() && translation < 0.0 {
                    self.drag_offset = translation;
                }
            }
            OnboardingAction::SwipeEnded(predicted) => {
                if !self.shows_swipe_handle() {
                    return false;
                }
                if predicted < -settings.reveal_swipe_threshold {
                    log::debug!("Onboarding revealed");
                    self.revealed = true;
                } else {
                    self.drag_offset = 0.0;
                }
            }
            OnboardingAction::PageChanged(page) => {
                self.page = page.min(self.last_page());
            }
            OnboardingAction::Continue => {
                if !self.can_continue() {
                    return false;
                }
                if self.page < self.last_page() {
                    self.page += 1;
                } else {
                    log::info!("Onboarding complete");
                    self.complete = true;
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_hidden_until_revealed() {
        let settings = Settings::default();
        let mut state = OnboardingState::new(3);
        assert!(!state.can_continue());
        assert!(state.shows_swipe_handle());

        assert!(!state.reduce(OnboardingAction::Continue, &settings));
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let settings = Settings::default();
        let mut state = OnboardingState::new(3);
        state.reduce(OnboardingAction::SwipeChanged(-50.0), &settings);
        assert_eq!(state.drag_offset, -50.0);

        state.reduce(OnboardingAction::SwipeEnded(-120.0), &settings);
        assert!(!state.revealed);
        assert_eq!(state.drag_offset, 0.0);
    }

    #[test]
    fn test_downward_swipe_ignored() {
        let settings = Settings::default();
        let mut state = OnboardingState::new(3);
        state.reduce(OnboardingAction::SwipeChanged(30.0), &settings);
        assert_eq!(state.drag_offset, 0.0);
    }

    #[test]
    fn test_walkthrough() {
        let settings = Settings::default();
        let mut state = OnboardingState::new(3);

        state.reduce(OnboardingAction::SwipeEnded(-240.0), &settings);
        assert!(state.revealed);
        assert!(!state.shows_swipe_handle());
        assert_eq!(state.continue_label(), "Continue");

        assert!(!state.reduce(OnboardingAction::Continue, &settings));
        assert_eq!(state.page, 1);
        assert!(!state.reduce(OnboardingAction::Continue, &settings));
        assert_eq!(state.page, 2);
        assert_eq!(state.continue_label(), "Start Cooking");

        assert!(state.reduce(OnboardingAction::Continue, &settings));
        assert!(state.complete);
        assert!(!state.can_continue());
        assert!(!state.reduce(OnboardingAction::Continue, &settings));
    }

    #[test]
    fn test_paging_past_first_page_enables_continue() {
        let settings = Settings::default();
        let mut state = OnboardingState::new(3);
        state.reduce(OnboardingAction::PageChanged(1), &settings);
        assert!(state.can_continue());

        state.reduce(OnboardingAction::PageChanged(9), &settings);
        assert_eq!(state.page, 2);
    }
}
