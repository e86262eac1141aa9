use dioxus::prelude::*;
use modal_demo_common::modal::{ModalAction, DEFAULT_TEXT, DEFAULT_TITLE};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_MODAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Caller-supplied reactions to the modal's controls. Missing handlers are no-ops.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct ModalHandlers {
    pub on_close: Option<EventHandler<()>>,
    pub on_confirm: Option<EventHandler<()>>,
    pub on_cancel: Option<EventHandler<()>>,
}

impl ModalHandlers {
    pub fn dispatch(&self, action: ModalAction) {
        let handler = match action {
            ModalAction::Close => self.on_close,
            ModalAction::Confirm => self.on_confirm,
            ModalAction::Cancel => self.on_cancel,
        };
        if let Some(handler) = handler {
            handler.call(());
        }
    }
}

/// Confirmation dialog. Holds no state of its own; the parent decides whether
/// it is mounted and what each control does.
#[component]
pub fn Modal(
    #[props(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[props(into, default = DEFAULT_TEXT.to_string())] text: String,
    on_close: Option<EventHandler<()>>,
    on_confirm: Option<EventHandler<()>>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let handlers = ModalHandlers {
        on_close,
        on_confirm,
        on_cancel,
    };

    // Unique per mounted instance so aria references never collide.
    let instance = use_hook(|| NEXT_MODAL_ID.fetch_add(1, Ordering::Relaxed));
    let title_id = format!("modal-title-{instance}");
    let text_id = format!("modal-text-{instance}");

    rsx! {
        div { class: "modal",
            div {
                class: "modal-content",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "{title_id}",
                aria_describedby: "{text_id}",
                button {
                    class: "modal-close",
                    aria_label: ModalAction::Close.accessible_name(),
                    onclick: move |_| handlers.dispatch(ModalAction::Close),
                    "×"
                }
                h2 { id: "{title_id}", "{title}" }
                p { id: "{text_id}", "{text}" }
                div { class: "modal-actions",
                    button {
                        class: "primary",
                        onclick: move |_| handlers.dispatch(ModalAction::Confirm),
                        "Ok"
                    }
                    button {
                        onclick: move |_| handlers.dispatch(ModalAction::Cancel),
                        "Cancel"
                    }
                }
            }
        }
    }
}
