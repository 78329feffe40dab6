use dioxus::prelude::*;
use portal_client::ApiClient;
use portal_common::RequestTracker;
use portal_ui::{ActivityList, ArtworkCard, PanelMessage, PanelView, TournamentList};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "dashboard",
            ActivitiesPanel {}
            TournamentsPanel {}
            ArtworkPanel {}
        }
    }
}

#[component]
fn ActivitiesPanel() -> Element {
    let client: ApiClient = use_context();
    let tracker: RequestTracker = use_context();
    let data = use_resource(move || {
        let client = client.clone();
        let tracker = tracker.clone();
        async move {
            tracker
                .track(client.fetch_activities())
                .await
                .map_err(|e| e.to_string())
        }
    });

    let body = match &*data.read() {
        Some(Ok(activities)) => rsx! {
            ActivityList { activities: activities.clone() }
        },
        Some(Err(e)) => rsx! {
            PanelMessage { text: e.clone(), is_error: true }
        },
        None => rsx! {
            PanelMessage { text: "Fetching activities".to_string() }
        },
    };

    rsx! {
        PanelView { title: "Activities".to_string(), {body} }
    }
}

#[component]
fn TournamentsPanel() -> Element {
    let client: ApiClient = use_context();
    let tracker: RequestTracker = use_context();
    let data = use_resource(move || {
        let client = client.clone();
        let tracker = tracker.clone();
        async move {
            tracker
                .track(client.fetch_tournaments())
                .await
                .map_err(|e| e.to_string())
        }
    });

    let body = match &*data.read() {
        Some(Ok(tournaments)) => rsx! {
            TournamentList { tournaments: tournaments.clone() }
        },
        Some(Err(e)) => rsx! {
            PanelMessage { text: e.clone(), is_error: true }
        },
        None => rsx! {
            PanelMessage { text: "Fetching tournaments".to_string() }
        },
    };

    rsx! {
        PanelView { title: "Tournaments".to_string(), {body} }
    }
}

#[component]
fn ArtworkPanel() -> Element {
    let client: ApiClient = use_context();
    let tracker: RequestTracker = use_context();
    let mut data = use_resource(move || {
        let client = client.clone();
        let tracker = tracker.clone();
        async move {
            tracker
                .track(client.fetch_artwork())
                .await
                .map_err(|e| e.to_string())
        }
    });

    let body = match &*data.read() {
        Some(Ok(artwork)) => rsx! {
            ArtworkCard { artwork: artwork.clone(), on_refresh: move |_| data.restart() }
        },
        Some(Err(e)) => rsx! {
            PanelMessage { text: e.clone(), is_error: true }
        },
        None => rsx! {
            PanelMessage { text: "Fetching artwork".to_string() }
        },
    };

    rsx! {
        PanelView { title: "Artwork".to_string(), {body} }
    }
}
