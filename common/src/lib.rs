pub mod app_state;
pub mod greeting;
pub mod modal;

pub use app_state::{AppEvent, AppState, LastAction};
pub use greeting::{greet, GreetingError, GreetingInput};
pub use modal::ModalAction;
