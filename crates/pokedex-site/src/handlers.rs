//! Preview request handlers.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | List page rendered from the query parameters, with live controls |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use pokedex_core::{CategoryFilter, SortKey, ViewAction, ViewState};
use serde::Deserialize;

use crate::error::PreviewError;
use crate::state::PreviewState;
use crate::views::{LinkStyle, ListPage};

/// List controls carried in the query string.
///
/// Numbers are kept as text so malformed values are ignored instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Search query.
    pub q: Option<String>,
    /// Category selector value.
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
    /// Page size.
    pub per_page: Option<String>,
    /// 1-based page.
    pub page: Option<String>,
}

impl ListQuery {
    /// Replay these controls onto a fresh [`ViewState`].
    ///
    /// Controls are applied in selector order, so the page is set last and
    /// survives the resets the other controls cause.
    pub fn to_view_state(
        &self,
        default_page_size: usize,
        entries: &[pokedex_types::CatalogEntry],
    ) -> ViewState {
        let mut state = ViewState::with_page_size(default_page_size);
        if let Some(q) = &self.q {
            state = state.transition(ViewAction::SetQuery(q.clone()), 0);
        }
        if let Some(category) = &self.category {
            state = state.transition(ViewAction::SetCategory(CategoryFilter::from_value(category)), 0);
        }
        if let Some(sort) = &self.sort {
            state = state.transition(ViewAction::SetSort(SortKey::from_key(sort)), 0);
        }
        if let Some(size) = self.per_page.as_deref().and_then(|s| s.parse().ok()) {
            state = state.transition(ViewAction::SetPageSize(size), 0);
        }
        if let Some(page) = self.page.as_deref().and_then(|s| s.parse().ok()) {
            state = state.apply(ViewAction::GoToPage(page), entries);
        }
        state
    }
}

/// `GET /`: the list processed from the query string.
///
/// Unlike the pre-built `index.html`, this page carries the search, filter,
/// and sort form, since the server can answer it.
pub async fn index(
    State(state): State<Arc<PreviewState>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, PreviewError> {
    let view_state = query.to_view_state(state.page_size, &state.catalog);
    let view = view_state.evaluate(&state.catalog);
    let page = ListPage::new(
        &state.site,
        &view_state,
        &view,
        &state.categories,
        LinkStyle::Query {
            default_page_size: state.page_size,
        },
    );
    Ok(Html(state.renderer.render_list(&page)?).into_response())
}
