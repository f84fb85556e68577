//! Application lifecycle around a selection session

use std::path::PathBuf;

/// Application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Idle state - ready to snip
    Idle,
    /// Selection overlay is up
    Selecting,
    /// Selection committed, capture worker busy
    Capturing,
}

impl AppState {
    /// Get display text for current state
    pub fn display_text(&self) -> &'static str {
        match self {
            AppState::Idle => "Ready",
            AppState::Selecting => "Select a region...",
            AppState::Capturing => "Capturing...",
        }
    }

    /// Check if a new selection may start
    pub fn can_select(&self) -> bool {
        matches!(self, AppState::Idle)
    }
}

/// Result of the last finished capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCapture {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// State machine transitions
pub struct StateMachine {
    state: AppState,
    last_capture: Option<SavedCapture>,
}

impl StateMachine {
    /// Create a new state machine
    pub fn new() -> Self {
        Self {
            state: AppState::Idle,
            last_capture: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn last_capture(&self) -> Option<&SavedCapture> {
        self.last_capture.as_ref()
    }

    /// Transition to selecting state
    pub fn start_selecting(&mut self) -> bool {
        if self.state.can_select() {
            self.state = AppState::Selecting;
            true
        } else {
            false
        }
    }

    /// Cancel selection and return to idle
    pub fn cancel_selecting(&mut self) -> bool {
        if matches!(self.state, AppState::Selecting) {
            self.state = AppState::Idle;
            true
        } else {
            false
        }
    }

    /// Selection committed, hand off to capture
    pub fn start_capturing(&mut self) -> bool {
        if matches!(self.state, AppState::Selecting) {
            self.state = AppState::Capturing;
            true
        } else {
            false
        }
    }

    /// Capture saved, return to idle
    pub fn finish_capturing(&mut self, saved: SavedCapture) {
        self.state = AppState::Idle;
        self.last_capture = Some(saved);
    }

    /// Capture failed, return to idle
    pub fn fail_capturing(&mut self) {
        if matches!(self.state, AppState::Capturing) {
            self.state = AppState::Idle;
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut sm = StateMachine::new();
        assert!(sm.start_selecting());
        assert!(!sm.start_selecting());
        assert!(sm.start_capturing());
        assert_eq!(sm.state().display_text(), "Capturing...");

        let saved = SavedCapture { path: "a.png".into(), width: 3, height: 4 };
        sm.finish_capturing(saved.clone());
        assert_eq!(sm.state(), &AppState::Idle);
        assert_eq!(sm.last_capture(), Some(&saved));
    }

    #[test]
    fn cancel_only_from_selecting() {
        let mut sm = StateMachine::new();
        assert!(!sm.cancel_selecting());
        sm.start_selecting();
        assert!(sm.cancel_selecting());
        assert!(!sm.start_capturing());
    }

    #[test]
    fn failed_capture_returns_to_idle() {
        let mut sm = StateMachine::new();
        sm.start_selecting();
        sm.start_capturing();
        sm.fail_capturing();
        assert!(sm.state().can_select());
        assert_eq!(sm.last_capture(), None);
    }
}
