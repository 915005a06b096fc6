//! Two-click slot selection.
//!
//! The first click on a calendar cell only highlights it. Clicking the exact
//! same cell again (same start, end and room) confirms the choice and opens the
//! booking dialog. A single click never opens the dialog.
//!
//! ```text
//! Idle --select--> Highlighted
//! Highlighted --select(same)--> Confirmed
//! Highlighted --select(other)--> Highlighted
//! Confirmed --cancel | book--> Idle
//! ```

use super::models::PendingSelection;
use shared::SelectionOutcome;

/// Current state of the selector, carrying the pending value where one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Idle,
    Highlighted(PendingSelection),
    Confirmed(PendingSelection),
}

#[derive(Debug, Clone, Default)]
pub struct SlotSelector {
    state: SelectorState,
}

impl SlotSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `candidate`.
    ///
    /// Matching the current pending value confirms it; anything else replaces
    /// the pending value and (re)enters the highlighted state. This also holds
    /// while the dialog is open: clicking a different cell closes it.
    pub fn select(&mut self, candidate: PendingSelection) -> SelectionOutcome {
        match self.pending() {
            Some(pending) if pending == candidate => {
                self.state = SelectorState::Confirmed(candidate);
                SelectionOutcome::Confirmed
            }
            _ => {
                self.state = SelectorState::Highlighted(candidate);
                SelectionOutcome::Highlighted
            }
        }
    }

    /// Drop the pending selection. Returns what was cleared, if anything.
    pub fn cancel(&mut self) -> Option<PendingSelection> {
        let cleared = self.pending();
        self.state = SelectorState::Idle;
        cleared
    }

    /// The selection the booking dialog was opened for, if it is open
    pub fn confirmed(&self) -> Option<PendingSelection> {
        match self.state {
            SelectorState::Confirmed(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<PendingSelection> {
        match self.state {
            SelectorState::Idle => None,
            SelectorState::Highlighted(pending) | SelectorState::Confirmed(pending) => {
                Some(pending)
            }
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(self.state, SelectorState::Confirmed(_))
    }
}
