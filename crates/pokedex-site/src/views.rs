//! Template view models.
//!
//! Every value a template prints is computed here, so the templates stay
//! free of logic beyond loops and conditionals.

use pokedex_core::display::{category_color, decimal_tenths, humanize, stat_percent};
use pokedex_core::pagination::{PAGE_SIZES, PageLink};
use pokedex_core::{CategoryFilter, ListView, SortKey, ViewState};
use pokedex_types::{CatalogEntry, DetailRecord, EntryId};
use serde::Serialize;

/// Image used when an entry has no sprite.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Values shared by every page.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    /// Site title.
    pub title: String,
    /// Number of entries in the catalog.
    pub entry_count: usize,
    /// Build timestamp (RFC 3339).
    pub generated_at: String,
}

/// A coloured category label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Badge {
    /// Category name.
    pub name: String,
    /// Background colour.
    pub color: &'static str,
}

impl Badge {
    /// Badge for `category`.
    pub fn new(category: &str) -> Self {
        Self {
            name: category.to_owned(),
            color: category_color(category),
        }
    }
}

/// Route of the detail page for `id`.
pub fn entry_href(id: EntryId) -> String {
    format!("/pokemon/{id}/")
}

/// One card of the list grid.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    /// Numeric id.
    pub id: u32,
    /// `#001`-style id.
    pub number: String,
    /// Display name.
    pub name: String,
    /// Detail page route.
    pub href: String,
    /// Sprite URL or the placeholder.
    pub image: String,
    /// Category badges.
    pub badges: Vec<Badge>,
}

impl Card {
    /// Build the card for `entry`.
    pub fn new(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            number: entry.id.padded(),
            name: entry.name.clone(),
            href: entry_href(entry.id),
            image: image_or_placeholder(entry),
            badges: entry.categories.iter().map(|c| Badge::new(c)).collect(),
        }
    }
}

fn image_or_placeholder(entry: &CatalogEntry) -> String {
    entry
        .sprites
        .best()
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_owned()
}

/// An `<option>` of a select control.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether this option is selected.
    pub selected: bool,
}

/// One element of the numbered page navigation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    /// Page number, or `None` for a gap marker.
    pub page: Option<usize>,
    /// Link target (empty for gaps).
    pub href: String,
    /// Whether this is the page being shown.
    pub current: bool,
}

/// How list pages link to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Pre-rendered routes: `/` for page 1, `/page/{n}/` after that.
    Static,
    /// Query-string routes answered by the preview server.
    ///
    /// `per_page` is written out unless it matches `default_page_size`,
    /// the size the server falls back to when the parameter is absent.
    Query {
        /// Page size the server assumes without `per_page`.
        default_page_size: usize,
    },
}

impl LinkStyle {
    /// Link to `page` of the list described by `state`.
    pub fn page_href(self, state: &ViewState, page: usize) -> String {
        match self {
            Self::Static if page <= 1 => String::from("/"),
            Self::Static => format!("/page/{page}/"),
            Self::Query { default_page_size } => query_href(state, page, default_page_size),
        }
    }
}

/// Query-string link that reproduces `state` on `page`.
///
/// Parameters still at their defaults are left out; the page size default
/// is the one the serving side uses.
pub fn query_href(state: &ViewState, page: usize, default_page_size: usize) -> String {
    let mut params = Vec::new();
    if !state.query().is_empty() {
        params.push(format!("q={}", urlencoding::encode(state.query())));
    }
    if let CategoryFilter::Only(category) = state.category() {
        params.push(format!("type={}", urlencoding::encode(category)));
    }
    if state.sort() != SortKey::Id {
        params.push(format!("sort={}", state.sort().as_str()));
    }
    if state.page_size() != default_page_size {
        params.push(format!("per_page={}", state.page_size()));
    }
    params.push(format!("page={page}"));
    format!("/?{}", params.join("&"))
}

/// Context of `list.html.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    /// Shared values.
    pub site: SiteMeta,
    /// Search, filter, and sort controls are live (preview server only).
    pub interactive: bool,
    /// Current search query.
    pub query: String,
    /// Category selector.
    pub category_options: Vec<SelectOption>,
    /// Sort selector.
    pub sort_options: Vec<SelectOption>,
    /// Page size selector.
    pub page_size_options: Vec<SelectOption>,
    /// Query or category narrows the list.
    pub filtered: bool,
    /// Any control differs from its default.
    pub show_clear: bool,
    /// Cards on this page.
    pub cards: Vec<Card>,
    /// Entries passing the filters.
    pub total_count: usize,
    /// 1-based position of the first card (0 when empty).
    pub first_shown: usize,
    /// 1-based position of the last card.
    pub last_shown: usize,
    /// Current page.
    pub page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Previous page link.
    pub prev_href: Option<String>,
    /// Next page link.
    pub next_href: Option<String>,
    /// Numbered navigation.
    pub nav: Vec<NavLink>,
}

impl ListPage {
    /// Build the list context for `state` evaluated as `view`.
    pub fn new(
        site: &SiteMeta,
        state: &ViewState,
        view: &ListView<'_>,
        categories: &[String],
        style: LinkStyle,
    ) -> Self {
        let mut category_options = vec![SelectOption {
            value: CategoryFilter::SENTINEL.to_owned(),
            label: String::from("All Types"),
            selected: *state.category() == CategoryFilter::All,
        }];
        category_options.extend(categories.iter().map(|category| SelectOption {
            value: category.clone(),
            label: category.clone(),
            selected: state.category().as_str() == category,
        }));

        let sort_options = SortKey::ALL
            .iter()
            .map(|key| SelectOption {
                value: key.as_str().to_owned(),
                label: key.label().to_owned(),
                selected: *key == state.sort(),
            })
            .collect();

        let page_size_options = PAGE_SIZES
            .iter()
            .map(|size| SelectOption {
                value: size.to_string(),
                label: format!("{size} per page"),
                selected: *size == state.page_size(),
            })
            .collect();

        let nav = view
            .page_links()
            .into_iter()
            .map(|link| match link {
                PageLink::Number { page, current } => NavLink {
                    page: Some(page),
                    href: style.page_href(state, page),
                    current,
                },
                PageLink::Ellipsis => NavLink {
                    page: None,
                    href: String::new(),
                    current: false,
                },
            })
            .collect();

        let first_shown = if view.entries.is_empty() {
            0
        } else {
            view.start_index.saturating_add(1)
        };

        Self {
            site: site.clone(),
            interactive: matches!(style, LinkStyle::Query { .. }),
            query: state.query().to_owned(),
            category_options,
            sort_options,
            page_size_options,
            filtered: state.is_filtered(),
            show_clear: state.has_active_controls(),
            cards: view.entries.iter().map(|entry| Card::new(entry)).collect(),
            total_count: view.total_count,
            first_shown,
            last_shown: view.end_index,
            page: view.page,
            total_pages: view.total_pages,
            prev_href: view
                .has_previous()
                .then(|| style.page_href(state, view.page.saturating_sub(1))),
            next_href: view
                .has_next()
                .then(|| style.page_href(state, view.page.saturating_add(1))),
            nav,
        }
    }
}

/// A base stat row on the detail page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatRow {
    /// Humanized stat name.
    pub name: String,
    /// Raw value.
    pub value: u32,
    /// Bar width in percent.
    pub percent: u32,
}

/// An ability row on the detail page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AbilityRow {
    /// Humanized ability name.
    pub name: String,
    /// Whether the ability is hidden.
    pub hidden: bool,
}

/// Context of `entry.html.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPage {
    /// Shared values.
    pub site: SiteMeta,
    /// `#001`-style id.
    pub number: String,
    /// Display name.
    pub name: String,
    /// Sprite URL or the placeholder.
    pub image: String,
    /// Category badges.
    pub badges: Vec<Badge>,
    /// Flavor text, when available.
    pub description: Option<String>,
    /// Base stats.
    pub stats: Vec<StatRow>,
    /// Height in metres.
    pub height: String,
    /// Weight in kilograms.
    pub weight: String,
    /// Abilities.
    pub abilities: Vec<AbilityRow>,
    /// First moves, humanized.
    pub moves: Vec<String>,
    /// Moves not shown.
    pub more_moves: usize,
    /// Previous entry link.
    pub prev_href: Option<String>,
    /// Next entry link.
    pub next_href: Option<String>,
}

impl EntryPage {
    /// Build the detail context.
    ///
    /// The next link is offered up to `max_known_id`; at most
    /// `move_preview` moves are listed.
    pub fn new(site: &SiteMeta, detail: &DetailRecord, max_known_id: u32, move_preview: usize) -> Self {
        let entry = &detail.entry;
        Self {
            site: site.clone(),
            number: entry.id.padded(),
            name: entry.name.clone(),
            image: image_or_placeholder(entry),
            badges: entry.categories.iter().map(|c| Badge::new(c)).collect(),
            description: detail.description.clone(),
            stats: entry
                .stats
                .iter()
                .map(|stat| StatRow {
                    name: humanize(&stat.name),
                    value: stat.value,
                    percent: stat_percent(stat.value),
                })
                .collect(),
            height: decimal_tenths(entry.height),
            weight: decimal_tenths(entry.weight),
            abilities: entry
                .abilities
                .iter()
                .map(|ability| AbilityRow {
                    name: humanize(&ability.name),
                    hidden: ability.is_hidden,
                })
                .collect(),
            moves: entry.moves.iter().take(move_preview).map(|m| humanize(m)).collect(),
            more_moves: entry.moves.len().saturating_sub(move_preview),
            prev_href: entry.id.previous().map(entry_href),
            next_href: entry.id.next_within(max_known_id).map(entry_href),
        }
    }
}

/// Context of `not_found.html.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundPage {
    /// Shared values.
    pub site: SiteMeta,
}
