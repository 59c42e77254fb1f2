//! Configuration, list processing, and display rules for the Pokedex site.
//!
//! This crate owns everything between the fetched catalog and the rendered
//! markup that is not I/O: the list processor that filters, sorts, and
//! paginates entries, and the formatting rules both views share.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `pokedex.yaml` into
//!   strongly-typed structs.
//! - [`query`] -- Search, category filter, and sort over the catalog.
//! - [`pagination`] -- Page slicing and page-number navigation.
//! - [`view_state`] -- Immutable [`ViewState`] and its transitions.
//! - [`display`] -- Category colours, unit conversion, slug formatting.
//!
//! [`ViewState`]: view_state::ViewState

pub mod config;
pub mod display;
pub mod pagination;
pub mod query;
pub mod view_state;

pub use config::{ConfigError, ConfigSource, PokedexConfig};
pub use query::{CategoryFilter, SortKey};
pub use view_state::{ListView, ViewAction, ViewState};
