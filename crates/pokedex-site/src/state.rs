//! Shared state of the preview server.
//!
//! Loaded once at startup from a built site and never mutated, so handlers
//! share it through an `Arc` without locking.

use std::path::{Path, PathBuf};

use pokedex_core::query::all_categories;
use pokedex_types::CatalogEntry;

use crate::generate::{build_time, load_catalog};
use crate::render::SiteRenderer;
use crate::server::ServerError;
use crate::views::SiteMeta;

/// Read-only state behind every preview request.
#[derive(Debug)]
pub struct PreviewState {
    /// Directory holding the built site.
    pub root: PathBuf,
    /// The catalog read from `catalog.json`.
    pub catalog: Vec<CatalogEntry>,
    /// Every category across the catalog, sorted.
    pub categories: Vec<String>,
    /// Values shared by every rendered page.
    pub site: SiteMeta,
    /// Page size used when the request names none.
    pub page_size: usize,
    /// Template set for dynamic list pages.
    pub renderer: SiteRenderer,
}

impl PreviewState {
    /// Build state from an in-memory catalog built at `generated_at`.
    pub fn new(
        root: PathBuf,
        catalog: Vec<CatalogEntry>,
        renderer: SiteRenderer,
        title: &str,
        page_size: usize,
        generated_at: String,
    ) -> Self {
        let categories = all_categories(&catalog);
        let site = SiteMeta {
            title: title.to_owned(),
            entry_count: catalog.len(),
            generated_at,
        };
        Self {
            root,
            catalog,
            categories,
            site,
            page_size,
            renderer,
        }
    }

    /// Load the catalog and templates for the site built in `root`.
    ///
    /// The build time shown in the footer is the one the static pages carry.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Catalog`] if `catalog.json` or a template
    /// cannot be loaded.
    pub fn load(
        root: &Path,
        templates_dir: &Path,
        title: &str,
        page_size: usize,
    ) -> Result<Self, ServerError> {
        let catalog = load_catalog(root).map_err(|e| ServerError::Catalog(e.to_string()))?;
        let renderer =
            SiteRenderer::new(templates_dir).map_err(|e| ServerError::Catalog(e.to_string()))?;
        let generated_at = build_time(root).unwrap_or_default();
        Ok(Self::new(
            root.to_path_buf(),
            catalog,
            renderer,
            title,
            page_size,
            generated_at,
        ))
    }
}
