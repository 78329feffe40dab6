pub mod indicator;
pub mod pages;

use std::rc::Rc;

use dioxus::prelude::*;
use pages::{AppLayout, Dashboard, LogActivity};
use portal_client::ApiClient;
use portal_common::{IndicatorConfig, RequestTracker, Theme};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/activities/new")]
    LogActivity {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(ApiClient::default);
    use_context_provider(|| RequestTracker::new(indicator::dispatch_visibility));

    // Installed during the first render so the listener exists before any
    // page starts a request. Dropping the binding removes the listener and
    // cancels any running timer.
    use_hook(|| Rc::new(indicator::install(IndicatorConfig::default())));

    let theme_css = Theme::default().css_variables();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { "{theme_css}" }
        div { class: "app-shell", Router::<Route> {} }
    }
}
