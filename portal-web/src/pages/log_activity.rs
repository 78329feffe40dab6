use dioxus::prelude::*;
use portal_client::ApiClient;
use portal_common::RequestTracker;
use portal_ui::format::format_date;
use portal_ui::{ActivityDraft, ActivityFormView, PanelView};
use tracing::{info, warn};

#[component]
pub fn LogActivity() -> Element {
    let client: ApiClient = use_context();
    let tracker: RequestTracker = use_context();
    let mut draft = use_signal(ActivityDraft::default);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        if submitting() {
            return;
        }
        let activity = match draft.read().to_new_activity() {
            Ok(activity) => activity,
            Err(e) => {
                error.set(Some(e.to_string()));
                status.set(None);
                return;
            }
        };

        submitting.set(true);
        error.set(None);
        let client = client.clone();
        let tracker = tracker.clone();
        spawn(async move {
            match tracker.track(client.create_activity(&activity)).await {
                Ok(created) => {
                    info!("Logged {} activity", created.activity_type);
                    let date = format_date(&created.activity_date);
                    status.set(Some(format!("Saved {} on {date}", created.activity_type)));
                    draft.set(ActivityDraft::default());
                }
                Err(e) => {
                    warn!("Create activity failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page",
            PanelView { title: "Log activity".to_string(),
                ActivityFormView {
                    draft: draft(),
                    on_change: move |next| draft.set(next),
                    on_submit: submit,
                    submitting: submitting(),
                    status: status(),
                    error: error(),
                }
            }
        }
    }
}
