//! Rendering, static generation, and local preview of the Pokedex site.
//!
//! # Modules
//!
//! - [`views`] -- Template view models built from catalog data.
//! - [`render`] -- `minijinja` template loading and page rendering.
//! - [`generate`] -- Writes the static output tree.
//! - [`state`] -- Shared read-only state of the preview server.
//! - [`handlers`] -- Preview request handlers.
//! - [`router`] -- Axum router (dynamic list, health, static files).
//! - [`server`] -- Preview server startup and shutdown.
//! - [`error`] -- Error types.

pub mod error;
pub mod generate;
pub mod handlers;
pub mod render;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use error::SiteError;
pub use generate::{BuildReport, SiteOptions, generate_site};
pub use render::SiteRenderer;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::PreviewState;
