use dioxus::prelude::*;
use dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus_html::{set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use std::any::Any;
use std::rc::Rc;

/// Drives a `VirtualDom` with synthetic clicks and renders it to HTML.
pub struct ClickDriver {
    dom: VirtualDom,
    mounted: Vec<ElementId>,
}

impl ClickDriver {
    pub fn new(mut dom: VirtualDom) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        Self {
            mounted: click_listeners(&mutations),
            dom,
        }
    }

    /// Elements that gained a click listener in the latest render, in document order.
    pub fn mounted(&self) -> &[ElementId] {
        &self.mounted
    }

    pub fn click(&mut self, element: ElementId) {
        let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        let runtime = self.dom.runtime();
        self.dom
            .in_runtime(|| runtime.handle_event("click", event, element));

        let mut mutations = Mutations::default();
        self.dom.render_immediate(&mut mutations);
        self.mounted = click_listeners(&mutations);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn click_listeners(mutations: &Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
            _ => None,
        })
        .collect()
}
