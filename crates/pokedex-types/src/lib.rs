//! Shared type definitions for the Pokedex static site.
//!
//! This crate is the single source of truth for the catalog data model.
//! Domain types flow downstream to `TypeScript` via `ts-rs` so anything
//! reading the generated `catalog.json` can share the same shapes.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe [`EntryId`] wrapper
//! - [`entry`] -- [`CatalogEntry`] and its sub-records
//! - [`api`] -- Wire records for the upstream `PokeAPI` responses

pub mod api;
pub mod entry;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use api::{ApiListing, ApiPokemon, ApiSpecies};
pub use entry::{Ability, BaseStat, CatalogEntry, DetailRecord, EntryReference, Sprites};
pub use ids::EntryId;

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for catalog types.

    #[test]
    fn export_bindings() {
        // ts-rs writes the bindings under `bindings/` relative to the
        // crate root when the types are exported.
        use ts_rs::TS;

        let _ = crate::ids::EntryId::export_all();
        let _ = crate::entry::EntryReference::export_all();
        let _ = crate::entry::Sprites::export_all();
        let _ = crate::entry::Ability::export_all();
        let _ = crate::entry::BaseStat::export_all();
        let _ = crate::entry::CatalogEntry::export_all();
        let _ = crate::entry::DetailRecord::export_all();
    }
}
