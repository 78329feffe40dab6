//! portal-client - HTTP client for the portal backend API
//!
//! Plain request/response wrappers: no retry, auth, or caching. Builds for
//! both wasm32 (browser fetch) and native targets.

mod client;
mod config;
mod models;

pub use client::{ApiClient, ApiError, Operation};
pub use config::{ApiConfig, DEV_API_BASE, PROD_API_BASE};
pub use models::{Activity, Artwork, NewActivity, Tournament};
