use crate::format::{format_date, format_placement};
use dioxus::prelude::*;
use portal_client::Tournament;

#[component]
pub fn TournamentList(tournaments: Vec<Tournament>) -> Element {
    if tournaments.is_empty() {
        return rsx! {
            p { class: "empty-note", "No tournaments entered" }
        };
    }

    rsx! {
        ul { class: "entry-list",
            for tournament in tournaments {
                TournamentRow { key: "{tournament.id}", tournament }
            }
        }
    }
}

#[component]
fn TournamentRow(tournament: Tournament) -> Element {
    let placement = format_placement(tournament.placement);
    let date = format_date(&tournament.tournament_date);

    rsx! {
        li { class: "entry",
            div { class: "entry-row",
                span { "{tournament.tournament_name}" }
                span { class: "highlight", "{placement}" }
            }
            div { class: "entry-meta", "{tournament.game} · {date}" }
        }
    }
}
