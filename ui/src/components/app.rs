use super::modal::Modal;
use crate::config::greeting_input_from_location;
use crate::constants::{APP_TITLE, SHOW_MODAL_LABEL};
use crate::util::format_build_time_local;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use document::Stylesheet;
use modal_demo_common::{AppEvent, AppState, ModalAction};

#[component]
pub fn App() -> Element {
    info!("App component loaded");

    let (state, on_event) = use_app_state();
    let greeting = use_hook(|| greeting_input_from_location().greeting());
    let build_time = format_build_time_local();

    rsx! {
        Stylesheet { href: asset!("/assets/main.css") }

        Shell { state: state(), greeting: greeting, on_event: on_event }

        footer { class: "build-info", "Built {build_time}" }
    }
}

/// Owns the app's display state. The returned handler is the only way it changes.
pub fn use_app_state() -> (Signal<AppState>, EventHandler<AppEvent>) {
    let mut state = use_signal(AppState::default);
    let on_event = use_callback(move |event: AppEvent| {
        info!("Handling {:?}", event);
        state.write().apply(event);
    });
    (state, on_event)
}

#[component]
pub fn Shell(state: AppState, greeting: String, on_event: EventHandler<AppEvent>) -> Element {
    let last_action = state.last_action.to_string();

    rsx! {
        div { class: "app",
            p { class: "last-action", "{last_action}" }
            h1 { "{APP_TITLE}" }
            p { class: "greeting", "{greeting}" }
            button {
                onclick: move |_| on_event.call(AppEvent::ShowModal),
                "{SHOW_MODAL_LABEL}"
            }
            if state.modal_visible {
                Modal {
                    on_close: move |_| on_event.call(ModalAction::Close.into()),
                    on_confirm: move |_| on_event.call(ModalAction::Confirm.into()),
                    on_cancel: move |_| on_event.call(ModalAction::Cancel.into()),
                }
            }
        }
    }
}
