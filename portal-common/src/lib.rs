//! portal-common - Host-independent logic shared by the portal front-end
//!
//! Nothing in here touches the DOM or the network. The web crate plugs browser
//! primitives into the traits defined here.

pub mod loading_indicator;
pub mod request_tracker;
pub mod theme;

pub use loading_indicator::{
    DotCounter, IndicatorConfig, IndicatorView, LoadingIndicator, TickScheduler,
};
pub use request_tracker::{visibility_from_detail, RequestGuard, RequestTracker};
pub use theme::Theme;
