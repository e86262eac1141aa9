use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Modal";
pub const DEFAULT_TEXT: &str = "Are you sure?";

/// One of the three ways a modal can be dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalAction {
    Close,
    Confirm,
    Cancel,
}

impl ModalAction {
    pub const ALL: [ModalAction; 3] = [ModalAction::Close, ModalAction::Confirm, ModalAction::Cancel];

    /// Name of the control as exposed to assistive technology.
    pub fn accessible_name(self) -> &'static str {
        match self {
            ModalAction::Close => "Close",
            ModalAction::Confirm => "Ok",
            ModalAction::Cancel => "Cancel",
        }
    }
}
