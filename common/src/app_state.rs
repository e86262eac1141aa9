use crate::modal::ModalAction;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of the most recent modal interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastAction {
    #[default]
    Waiting,
    Successful,
    Canceled,
}

impl LastAction {
    pub fn message(self) -> &'static str {
        match self {
            LastAction::Waiting => "Waiting for user interaction",
            LastAction::Successful => "Action Successful",
            LastAction::Canceled => "Action Canceled",
        }
    }
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// The "Show Modal" trigger was clicked.
    ShowModal,
    Modal(ModalAction),
}

impl From<ModalAction> for AppEvent {
    fn from(action: ModalAction) -> Self {
        AppEvent::Modal(action)
    }
}

/// Display state owned by the app shell.
///
/// The modal is mounted exactly when `modal_visible` is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub modal_visible: bool,
    pub last_action: LastAction,
}

impl AppState {
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShowModal => {
                self.modal_visible = true;
            }
            AppEvent::Modal(ModalAction::Close) => {
                self.modal_visible = false;
            }
            AppEvent::Modal(ModalAction::Confirm) => {
                self.modal_visible = false;
                self.last_action = LastAction::Successful;
            }
            AppEvent::Modal(ModalAction::Cancel) => {
                self.modal_visible = false;
                self.last_action = LastAction::Canceled;
            }
        }
        debug!(
            "Applied {:?}: modal_visible={}, last_action={:?}",
            event, self.modal_visible, self.last_action
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(events: &[AppEvent]) -> AppState {
        let mut state = AppState::default();
        for event in events {
            state.apply(*event);
        }
        state
    }

    #[test]
    fn starts_hidden_and_waiting() {
        let state = AppState::default();
        assert!(!state.modal_visible);
        assert_eq!(state.last_action.to_string(), "Waiting for user interaction");
    }

    #[test]
    fn show_modal_keeps_last_action() {
        let state = after(&[AppEvent::ShowModal]);
        assert!(state.modal_visible);
        assert_eq!(state.last_action, LastAction::Waiting);
    }

    #[test]
    fn confirm_hides_and_succeeds() {
        let state = after(&[AppEvent::ShowModal, ModalAction::Confirm.into()]);
        assert!(!state.modal_visible);
        assert_eq!(state.last_action.to_string(), "Action Successful");
    }

    #[test]
    fn cancel_hides_and_cancels() {
        let state = after(&[AppEvent::ShowModal, ModalAction::Cancel.into()]);
        assert!(!state.modal_visible);
        assert_eq!(state.last_action.to_string(), "Action Canceled");
    }

    #[test]
    fn close_leaves_last_action_untouched() {
        let state = after(&[AppEvent::ShowModal, ModalAction::Close.into()]);
        assert_eq!(state, AppState::default());

        let state = after(&[
            AppEvent::ShowModal,
            ModalAction::Confirm.into(),
            AppEvent::ShowModal,
            ModalAction::Close.into(),
        ]);
        assert!(!state.modal_visible);
        assert_eq!(state.last_action, LastAction::Successful);
    }

    #[test]
    fn cycles_between_outcomes() {
        let state = after(&[
            AppEvent::ShowModal,
            ModalAction::Cancel.into(),
            AppEvent::ShowModal,
            ModalAction::Confirm.into(),
        ]);
        assert_eq!(
            state,
            AppState {
                modal_visible: false,
                last_action: LastAction::Successful,
            }
        );
    }

    #[test]
    fn showing_twice_is_idempotent() {
        assert_eq!(
            after(&[AppEvent::ShowModal, AppEvent::ShowModal]),
            after(&[AppEvent::ShowModal])
        );
    }
}
