use crate::format::{format_date, format_distance, format_duration, format_pace};
use dioxus::prelude::*;
use portal_client::Activity;

#[component]
pub fn ActivityList(activities: Vec<Activity>) -> Element {
    if activities.is_empty() {
        return rsx! {
            p { class: "empty-note", "No activities recorded" }
        };
    }

    rsx! {
        ul { class: "entry-list",
            for activity in activities {
                ActivityRow { key: "{activity.id}", activity }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity) -> Element {
    let distance = format_distance(activity.distance_meters);
    let duration = format_duration(activity.duration_seconds);
    let pace = format_pace(activity.distance_meters, activity.duration_seconds);
    let date = format_date(&activity.activity_date);

    rsx! {
        li { class: "entry entry-row",
            span { class: "activity-type", "{activity.activity_type}" }
            span { "{distance}" }
            span { "{duration}" }
            if let Some(pace) = pace {
                span { class: "entry-meta", "{pace}" }
            }
            span { class: "entry-meta", "{date}" }
        }
    }
}
