//! Static site generation.
//!
//! Output layout (trailing-slash routes):
//!
//! ```text
//! index.html                  page 1 of the default list
//! page/{n}/index.html         pages 2.. of the default list
//! pokemon/{id}/index.html     one per listed id (not-found page on failure)
//! 404.html
//! catalog.json                the fetched catalog
//! placeholder.svg
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pokedex_core::config::SiteConfig;
use pokedex_core::query::all_categories;
use pokedex_core::{ViewAction, ViewState};
use pokedex_types::{CatalogEntry, DetailRecord, EntryId};
use tracing::{debug, info};

use crate::error::SiteError;
use crate::render::SiteRenderer;
use crate::views::{EntryPage, LinkStyle, ListPage, NotFoundPage, SiteMeta};

/// File name of the serialized catalog.
pub const CATALOG_FILE: &str = "catalog.json";
/// File name of the not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";
/// File name of the placeholder image.
pub const PLACEHOLDER_FILE: &str = "placeholder.svg";

/// Image shown for entries without sprites.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="96" height="96" viewBox="0 0 96 96">
  <circle cx="48" cy="48" r="44" fill="#f3f4f6" stroke="#d1d5db" stroke-width="4"/>
  <path d="M4 48h88" stroke="#d1d5db" stroke-width="4"/>
  <circle cx="48" cy="48" r="12" fill="#ffffff" stroke="#d1d5db" stroke-width="4"/>
</svg>
"##;

/// Settings for one build.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Site title.
    pub title: String,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Page size of the pre-rendered list.
    pub page_size: usize,
    /// Highest id offered by the next-entry link.
    pub max_known_id: u32,
    /// Moves listed on detail pages.
    pub move_preview: usize,
}

impl SiteOptions {
    /// Read the options from the `site` configuration section.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            output_dir: PathBuf::from(&config.output_dir),
            page_size: config.page_size,
            max_known_id: config.max_known_id,
            move_preview: config.detail_move_preview,
        }
    }
}

/// What a build wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// List pages written.
    pub list_pages: usize,
    /// Detail pages written.
    pub entry_pages: usize,
    /// Entry routes that got the not-found page.
    pub missing_entries: usize,
}

/// Write the whole site.
///
/// `details` pairs every listed id with its detail record, or `None` when
/// the detail fetch reported it as not found.
///
/// # Errors
///
/// Returns the first render or write failure.
pub fn generate_site(
    renderer: &SiteRenderer,
    options: &SiteOptions,
    catalog: &[CatalogEntry],
    details: &[(EntryId, Option<DetailRecord>)],
) -> Result<BuildReport, SiteError> {
    let out = options.output_dir.as_path();
    create_dir(out)?;

    write_file(&out.join(CATALOG_FILE), &serde_json::to_vec(catalog)?)?;
    write_file(&out.join(PLACEHOLDER_FILE), PLACEHOLDER_SVG.as_bytes())?;

    let site = SiteMeta {
        title: options.title.clone(),
        entry_count: catalog.len(),
        generated_at: build_time(out).unwrap_or_else(|| Utc::now().to_rfc3339()),
    };
    let mut report = BuildReport::default();

    let not_found = renderer.render_not_found(&NotFoundPage { site: site.clone() })?;
    write_file(&out.join(NOT_FOUND_FILE), not_found.as_bytes())?;

    let categories = all_categories(catalog);
    let first = ViewState::with_page_size(options.page_size);
    let pages = first.evaluate(catalog).total_pages.max(1);

    for page in 1..=pages {
        let state = first.clone().transition(ViewAction::GoToPage(page), pages);
        let view = state.evaluate(catalog);
        let html = renderer.render_list(&ListPage::new(
            &site,
            &state,
            &view,
            &categories,
            LinkStyle::Static,
        ))?;
        write_file(&list_page_path(out, page), html.as_bytes())?;
        report.list_pages = report.list_pages.saturating_add(1);
    }

    for (id, detail) in details {
        let html = if let Some(detail) = detail {
            report.entry_pages = report.entry_pages.saturating_add(1);
            renderer.render_entry(&EntryPage::new(
                &site,
                detail,
                options.max_known_id,
                options.move_preview,
            ))?
        } else {
            debug!(%id, "writing not-found page for entry route");
            report.missing_entries = report.missing_entries.saturating_add(1);
            not_found.clone()
        };
        write_file(&entry_page_path(out, *id), html.as_bytes())?;
    }

    info!(
        output = %out.display(),
        list_pages = report.list_pages,
        entry_pages = report.entry_pages,
        missing_entries = report.missing_entries,
        "site generated"
    );
    Ok(report)
}

/// Path of list page `page` under `out`.
pub fn list_page_path(out: &Path, page: usize) -> PathBuf {
    if page <= 1 {
        out.join("index.html")
    } else {
        out.join("page").join(page.to_string()).join("index.html")
    }
}

/// Path of the detail page for `id` under `out`.
pub fn entry_page_path(out: &Path, id: EntryId) -> PathBuf {
    out.join("pokemon").join(id.to_string()).join("index.html")
}

/// Read a previously written `catalog.json`.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the file cannot be read and
/// [`SiteError::Serde`] if it does not decode.
pub fn load_catalog(out: &Path) -> Result<Vec<CatalogEntry>, SiteError> {
    let path = out.join(CATALOG_FILE);
    let bytes = std::fs::read(&path).map_err(|e| SiteError::io(&path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build time of the site in `out`: the modification time of its
/// `catalog.json`, as RFC 3339. `None` when the file is missing.
pub fn build_time(out: &Path) -> Option<String> {
    let modified = std::fs::metadata(out.join(CATALOG_FILE))
        .and_then(|meta| meta.modified())
        .ok()?;
    Some(DateTime::<Utc>::from(modified).to_rfc3339())
}

fn create_dir(path: &Path) -> Result<(), SiteError> {
    std::fs::create_dir_all(path).map_err(|e| SiteError::io(path, e))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    std::fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_one_is_the_index() {
        let out = Path::new("dist");
        assert_eq!(list_page_path(out, 1), Path::new("dist/index.html"));
        assert_eq!(list_page_path(out, 3), Path::new("dist/page/3/index.html"));
    }

    #[test]
    fn entry_routes_use_plain_ids() {
        let out = Path::new("dist");
        assert_eq!(
            entry_page_path(out, EntryId(25)),
            Path::new("dist/pokemon/25/index.html")
        );
    }

    #[test]
    fn missing_catalog_is_io_error() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        assert!(matches!(load_catalog(dir.path()), Err(SiteError::Io { .. })));
        assert!(build_time(dir.path()).is_none());
    }
}
