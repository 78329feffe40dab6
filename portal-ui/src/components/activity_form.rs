//! Form for logging a new activity

use crate::activity_draft::{ActivityDraft, ACTIVITY_TYPES};
use dioxus::prelude::*;

/// Controlled form over an [`ActivityDraft`]. The page owns the draft and the
/// submit status.
#[component]
pub fn ActivityFormView(
    draft: ActivityDraft,
    on_change: EventHandler<ActivityDraft>,
    on_submit: EventHandler<()>,
    #[props(default)] submitting: bool,
    #[props(default)] status: Option<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    let input_class = "form-input";

    let type_draft = draft.clone();
    let distance_draft = draft.clone();
    let duration_draft = draft.clone();
    let date_draft = draft.clone();

    rsx! {
        form {
            class: "activity-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { class: "form-field",
                "Type"
                select {
                    class: input_class,
                    value: "{draft.activity_type}",
                    onchange: move |e| {
                        let mut next = type_draft.clone();
                        next.activity_type = e.value();
                        on_change.call(next);
                    },
                    for kind in ACTIVITY_TYPES.iter() {
                        option { key: "{kind}", value: "{kind}", "{kind}" }
                    }
                }
            }
            label { class: "form-field",
                "Distance (km)"
                input {
                    class: input_class,
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    value: "{draft.distance_km}",
                    oninput: move |e| {
                        let mut next = distance_draft.clone();
                        next.distance_km = e.value();
                        on_change.call(next);
                    },
                }
            }
            label { class: "form-field",
                "Duration (minutes)"
                input {
                    class: input_class,
                    r#type: "number",
                    step: "0.1",
                    min: "0",
                    value: "{draft.duration_minutes}",
                    oninput: move |e| {
                        let mut next = duration_draft.clone();
                        next.duration_minutes = e.value();
                        on_change.call(next);
                    },
                }
            }
            label { class: "form-field",
                "Date"
                input {
                    class: input_class,
                    r#type: "date",
                    value: "{draft.date}",
                    oninput: move |e| {
                        let mut next = date_draft.clone();
                        next.date = e.value();
                        on_change.call(next);
                    },
                }
            }
            button {
                class: "primary-button",
                r#type: "submit",
                disabled: submitting,
                if submitting {
                    "Saving"
                } else {
                    "Save activity"
                }
            }
            if let Some(status) = status {
                p { class: "form-status", "{status}" }
            }
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}
