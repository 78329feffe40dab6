mod activity_form;
mod activity_list;
mod artwork_card;
mod loading_indicator;
mod panel;
mod tournament_list;

pub use activity_form::ActivityFormView;
pub use activity_list::ActivityList;
pub use artwork_card::ArtworkCard;
pub use loading_indicator::LoadingIndicatorView;
pub use panel::{PanelMessage, PanelView};
pub use tournament_list::TournamentList;
