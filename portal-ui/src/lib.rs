//! portal-ui - View components for the portal front-end
//!
//! Pure view components: they take data and event handlers and render markup.
//! Fetching and browser wiring live in portal-web.

pub mod activity_draft;
pub mod components;
pub mod format;
pub mod wasm_utils;

pub use activity_draft::{ActivityDraft, DraftError, ACTIVITY_TYPES};
pub use components::*;
