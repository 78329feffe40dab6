//! Markup targeted by the loading indicator controller

use dioxus::prelude::*;
use portal_common::IndicatorConfig;

/// Container and dots span, looked up by id when the indicator toggles.
///
/// Starts hidden; the controller owns its display and text from then on, so
/// nothing here is reactive.
#[component]
pub fn LoadingIndicatorView(
    /// Override the element ids (defaults match `IndicatorConfig::default()`)
    #[props(default)]
    config: Option<IndicatorConfig>,
) -> Element {
    let config = config.unwrap_or_default();

    rsx! {
        div {
            id: "{config.container_id}",
            class: "loading-indicator",
            style: "display: none;",
            role: "status",
            "Loading"
            span { id: "{config.dots_id}" }
        }
    }
}
