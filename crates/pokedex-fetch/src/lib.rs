//! Build-time data fetching from `PokeAPI`.
//!
//! # Modules
//!
//! - [`client`] -- `reqwest` client with typed GET helpers.
//! - [`batch`] -- Fixed-size concurrent batches with a pause between them.
//! - [`bulk`] -- Listing plus every primary record, failures dropped.
//! - [`detail`] -- Primary and species records for one entry.
//! - [`error`] -- Error types.

pub mod batch;
pub mod bulk;
pub mod client;
pub mod detail;
pub mod error;

pub use batch::BatchSchedule;
pub use bulk::fetch_catalog;
pub use client::PokeApiClient;
pub use detail::fetch_detail;
pub use error::FetchError;
