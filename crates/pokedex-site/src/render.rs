//! Page rendering via `minijinja`.
//!
//! Loads the page templates from a directory once and renders the list,
//! detail, and not-found pages from their view models. Templates extend a
//! shared `layout.html.j2`. Output is always HTML-escaped.

use std::path::Path;

use minijinja::{AutoEscape, Environment};

use crate::error::SiteError;
use crate::views::{EntryPage, ListPage, NotFoundPage};

/// Shared page shell.
pub const LAYOUT_TEMPLATE: &str = "layout.html.j2";
/// List view.
pub const LIST_TEMPLATE: &str = "list.html.j2";
/// Detail view.
pub const ENTRY_TEMPLATE: &str = "entry.html.j2";
/// Not-found page.
pub const NOT_FOUND_TEMPLATE: &str = "not_found.html.j2";

const TEMPLATES: [&str; 4] = [
    LAYOUT_TEMPLATE,
    LIST_TEMPLATE,
    ENTRY_TEMPLATE,
    NOT_FOUND_TEMPLATE,
];

/// Renders site pages from a loaded template set.
pub struct SiteRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for SiteRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteRenderer").finish_non_exhaustive()
    }
}

impl SiteRenderer {
    /// Load every page template from `templates_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] if a template is missing or does not
    /// parse.
    pub fn new(templates_dir: &Path) -> Result<Self, SiteError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for name in TEMPLATES {
            let source = load_template(templates_dir, name)?;
            env.add_template_owned(name, source)
                .map_err(|e| SiteError::Template(format!("failed to parse {name}: {e}")))?;
        }

        Ok(Self { env })
    }

    /// Render a list page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] on render failure.
    pub fn render_list(&self, page: &ListPage) -> Result<String, SiteError> {
        self.render(LIST_TEMPLATE, page)
    }

    /// Render a detail page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] on render failure.
    pub fn render_entry(&self, page: &EntryPage) -> Result<String, SiteError> {
        self.render(ENTRY_TEMPLATE, page)
    }

    /// Render the not-found page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] on render failure.
    pub fn render_not_found(&self, page: &NotFoundPage) -> Result<String, SiteError> {
        self.render(NOT_FOUND_TEMPLATE, page)
    }

    fn render<S: serde::Serialize>(&self, name: &str, ctx: &S) -> Result<String, SiteError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| SiteError::Template(format!("{name} render failed: {e}")))
    }
}

fn load_template(dir: &Path, filename: &str) -> Result<String, SiteError> {
    let path = dir.join(filename);
    std::fs::read_to_string(&path)
        .map_err(|e| SiteError::Template(format!("failed to read {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_templates(dir: &Path) {
        std::fs::write(
            dir.join(LAYOUT_TEMPLATE),
            "<title>{{ site.title }}</title>{% block content %}{% endblock %}",
        )
        .ok();
        std::fs::write(
            dir.join(LIST_TEMPLATE),
            "{% extends \"layout.html.j2\" %}{% block content %}{% for c in cards %}[{{ c.name }}]{% endfor %}{% endblock %}",
        )
        .ok();
        std::fs::write(
            dir.join(ENTRY_TEMPLATE),
            "{% extends \"layout.html.j2\" %}{% block content %}{{ name }}{% endblock %}",
        )
        .ok();
        std::fs::write(
            dir.join(NOT_FOUND_TEMPLATE),
            "{% extends \"layout.html.j2\" %}{% block content %}missing{% endblock %}",
        )
        .ok();
    }

    fn meta() -> crate::views::SiteMeta {
        crate::views::SiteMeta {
            title: String::from("<Dex>"),
            entry_count: 0,
            generated_at: String::new(),
        }
    }

    #[test]
    fn renders_not_found_through_layout() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        write_templates(dir.path());

        let renderer = SiteRenderer::new(dir.path());
        assert!(renderer.is_ok());
        let Ok(renderer) = renderer else {
            return;
        };

        let html = renderer
            .render_not_found(&NotFoundPage { site: meta() })
            .unwrap_or_default();
        assert!(html.contains("missing"));
        // titles are escaped
        assert!(html.contains("&lt;Dex&gt;"));
    }

    #[test]
    fn missing_template_returns_error() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        std::fs::write(dir.path().join(LAYOUT_TEMPLATE), "x").ok();

        let result = SiteRenderer::new(dir.path());
        assert!(matches!(result, Err(SiteError::Template(_))));
    }

    #[test]
    fn project_templates_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        assert!(SiteRenderer::new(&dir).is_ok());
    }
}
