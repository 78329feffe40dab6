use dioxus::prelude::*;
use portal_client::Artwork;

/// Artwork image with caption and a button for another random piece
#[component]
pub fn ArtworkCard(artwork: Artwork, on_refresh: EventHandler<()>) -> Element {
    rsx! {
        figure { class: "artwork",
            img {
                class: "artwork-image",
                src: "{artwork.image_url}",
                alt: "{artwork.title}",
            }
            figcaption {
                div { class: "highlight", "{artwork.title}" }
                div { class: "entry-meta", "{artwork.artist}, {artwork.date_display}" }
            }
            button {
                class: "link-button",
                onclick: move |_| on_refresh.call(()),
                "Another"
            }
        }
    }
}
