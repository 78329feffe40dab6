use dioxus::prelude::*;

/// Titled dashboard panel
#[component]
pub fn PanelView(title: String, children: Element) -> Element {
    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{title}" }
            {children}
        }
    }
}

/// Placeholder or error line inside a panel
#[component]
pub fn PanelMessage(text: String, #[props(default)] is_error: bool) -> Element {
    rsx! {
        p { class: "panel-message", class: if is_error { "panel-error" }, "{text}" }
    }
}
