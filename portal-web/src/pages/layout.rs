use crate::Route;
use dioxus::prelude::*;
use portal_ui::LoadingIndicatorView;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "Data Portal" }
            nav { class: "app-nav",
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::LogActivity {}, "Log activity" }
            }
            LoadingIndicatorView {}
        }
        main { Outlet::<Route> {} }
    }
}
