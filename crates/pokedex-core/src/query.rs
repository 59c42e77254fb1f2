//! Search, category filter, and sort over the in-memory catalog.
//!
//! Everything here is a pure function of its inputs. The pipeline is always
//! applied in the same order: query filter, category filter, sort. Sorting is
//! stable, but ties between equal keys have no specified order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use pokedex_types::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Sort orders offered by the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Id ascending. Also used for unrecognized keys.
    #[default]
    Id,
    /// Name ascending.
    Name,
    /// Height descending.
    Height,
    /// Weight descending.
    Weight,
}

impl SortKey {
    /// Every sort key, in selector order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Height, Self::Weight];

    /// Parse a sort key. Unknown keys fall back to [`SortKey::Id`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "height" => Self::Height,
            "weight" => Self::Weight,
            _ => Self::Id,
        }
    }

    /// The query-string value of this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    /// Label shown in the sort selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Sort by ID",
            Self::Name => "Sort by Name",
            Self::Height => "Sort by Height",
            Self::Weight => "Sort by Weight",
        }
    }

    /// Compare two entries under this sort order.
    pub fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => compare_names(&a.name, &b.name),
            Self::Height => b.height.cmp(&a.height),
            Self::Weight => b.weight.cmp(&a.weight),
        }
    }
}

/// Category selection. `All` is the "no filtering" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Keep every entry.
    #[default]
    All,
    /// Keep entries carrying this label.
    Only(String),
}

impl CategoryFilter {
    /// The sentinel selector value meaning "no filtering".
    pub const SENTINEL: &'static str = "all";

    /// Parse a selector value. Empty strings and the sentinel mean `All`.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == Self::SENTINEL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// The selector value of this filter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::SENTINEL,
            Self::Only(category) => category,
        }
    }

    /// Whether `entry` passes this filter.
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => entry.has_category(category),
        }
    }
}

/// Whether `entry` matches a search query.
///
/// The query matches when it is a case-insensitive substring of the name or
/// a plain substring of the decimal id. An empty query matches everything.
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&query.to_lowercase())
        || entry.id.to_string().contains(query)
}

/// Filter and sort `entries`, returning references in display order.
pub fn process<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    category: &CategoryFilter,
    sort: SortKey,
) -> Vec<&'a CatalogEntry> {
    let mut filtered: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| matches_query(entry, query))
        .filter(|entry| category.admits(entry))
        .collect();
    filtered.sort_by(|a, b| sort.compare(a, b));
    filtered
}

/// Every distinct category label across `entries`, sorted.
pub fn all_categories(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Locale-style name comparison: case-insensitive first, then by raw bytes
/// so that the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
