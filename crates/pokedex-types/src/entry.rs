//! Catalog entry and its sub-records.
//!
//! A [`CatalogEntry`] is built once from an upstream record and is never
//! mutated afterwards. It is either fetched whole or dropped whole; there
//! are no partial updates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::api::ApiPokemon;
use crate::ids::EntryId;

/// Minimal listing record: a name and the URL of its detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryReference {
    /// Lowercase API name.
    pub name: String,
    /// Absolute URL of the detail resource (`.../pokemon/25/`).
    pub url: String,
}

impl EntryReference {
    /// Parse the entry id out of the detail URL.
    ///
    /// The id is the second-to-last `/`-separated segment, so the trailing
    /// slash the API always emits is required. Returns `None` when that
    /// segment is not a number.
    pub fn id(&self) -> Option<EntryId> {
        let mut segments = self.url.rsplit('/');
        segments.next()?;
        segments.next()?.parse().ok()
    }
}

/// Image URLs for an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Sprites {
    /// Official artwork, preferred for display.
    pub artwork: Option<String>,
    /// Small front sprite, used when no artwork exists.
    pub front: Option<String>,
}

impl Sprites {
    /// The best available image URL: artwork, then the front sprite.
    pub fn best(&self) -> Option<&str> {
        self.artwork
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.front.as_deref().filter(|url| !url.is_empty()))
    }
}

/// An ability an entry can have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ability {
    /// Lowercase, hyphenated ability name.
    pub name: String,
    /// Hidden abilities are shown with a badge.
    pub is_hidden: bool,
}

/// A named base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BaseStat {
    /// Lowercase, hyphenated stat name (`special-attack`).
    pub name: String,
    /// Base value, 0-255 by convention.
    pub value: u32,
}

/// A single entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CatalogEntry {
    /// Stable id; the lookup and routing key.
    pub id: EntryId,
    /// Lowercase API name.
    pub name: String,
    /// Detail resource URL this entry was fetched from.
    pub url: String,
    /// Image URLs.
    pub sprites: Sprites,
    /// Category labels in slot order (usually one or two).
    pub categories: Vec<String>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Abilities in slot order.
    pub abilities: Vec<Ability>,
    /// Base stats in API order.
    pub stats: Vec<BaseStat>,
    /// Move names, possibly truncated to a prefix.
    pub moves: Vec<String>,
    /// Number of moves before truncation.
    pub total_moves: u32,
}

impl CatalogEntry {
    /// Build an entry from an upstream record.
    ///
    /// `move_limit` keeps only that many leading moves; `None` keeps all.
    /// `total_moves` always reflects the untruncated list.
    pub fn from_api(url: String, record: ApiPokemon, move_limit: Option<usize>) -> Self {
        let total_moves = u32::try_from(record.moves.len()).unwrap_or(u32::MAX);
        let keep = move_limit.unwrap_or(usize::MAX);

        Self {
            id: EntryId(record.id),
            name: record.name,
            url,
            sprites: Sprites {
                artwork: record.sprites.other.official_artwork.front_default,
                front: record.sprites.front_default,
            },
            categories: record.types.into_iter().map(|slot| slot.kind.name).collect(),
            height: record.height,
            weight: record.weight,
            abilities: record
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    is_hidden: slot.is_hidden,
                })
                .collect(),
            stats: record
                .stats
                .into_iter()
                .map(|stat| BaseStat {
                    name: stat.stat.name,
                    value: stat.base_stat,
                })
                .collect(),
            moves: record
                .moves
                .into_iter()
                .take(keep)
                .map(|slot| slot.move_ref.name)
                .collect(),
            total_moves,
        }
    }

    /// Whether `category` is one of this entry's labels.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Result of the detail fetcher: an entry plus its optional description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DetailRecord {
    /// The full entry, with every move.
    pub entry: CatalogEntry,
    /// Localized description, absent when the species record failed or
    /// had no text in the configured language.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> ApiPokemon {
        let json = serde_json::json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": {
                "front_default": "https://img.example/front/1.png",
                "other": {"official-artwork": {"front_default": "https://img.example/art/1.png"}}
            },
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": ""}},
                {"slot": 2, "type": {"name": "poison", "url": ""}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
            ],
            "stats": [
                {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack", "url": ""}}
            ],
            "moves": [
                {"move": {"name": "razor-wind", "url": ""}},
                {"move": {"name": "swords-dance", "url": ""}},
                {"move": {"name": "cut", "url": ""}}
            ]
        });
        serde_json::from_value(json).unwrap_or_else(|e| {
            unreachable!("fixture must decode: {e}")
        })
    }

    #[test]
    fn reference_id_from_url() {
        let reference = EntryReference {
            name: "pikachu".to_owned(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_owned(),
        };
        assert_eq!(reference.id(), Some(EntryId(25)));
    }

    #[test]
    fn reference_id_requires_numeric_segment() {
        let no_slash = EntryReference {
            name: "pikachu".to_owned(),
            url: "https://pokeapi.co/api/v2/pokemon/25".to_owned(),
        };
        assert_eq!(no_slash.id(), None);

        let empty = EntryReference {
            name: "x".to_owned(),
            url: String::new(),
        };
        assert_eq!(empty.id(), None);
    }

    #[test]
    fn from_api_maps_all_fields() {
        let entry = CatalogEntry::from_api(
            "https://pokeapi.co/api/v2/pokemon/1/".to_owned(),
            bulbasaur(),
            None,
        );
        assert_eq!(entry.id, EntryId(1));
        assert_eq!(entry.categories, vec!["grass", "poison"]);
        assert_eq!(entry.height, 7);
        assert_eq!(entry.weight, 69);
        assert_eq!(entry.abilities.len(), 2);
        assert!(entry.abilities.iter().any(|a| a.name == "chlorophyll" && a.is_hidden));
        assert_eq!(entry.stats.first().map(|s| s.value), Some(45));
        assert_eq!(entry.moves.len(), 3);
        assert_eq!(entry.total_moves, 3);
        assert_eq!(entry.sprites.best(), Some("https://img.example/art/1.png"));
    }

    #[test]
    fn from_api_truncates_moves_but_keeps_total() {
        let entry = CatalogEntry::from_api(String::new(), bulbasaur(), Some(2));
        assert_eq!(entry.moves, vec!["razor-wind", "swords-dance"]);
        assert_eq!(entry.total_moves, 3);
    }

    #[test]
    fn sprites_fall_back_to_front() {
        let sprites = Sprites {
            artwork: None,
            front: Some("front.png".to_owned()),
        };
        assert_eq!(sprites.best(), Some("front.png"));

        let empty_artwork = Sprites {
            artwork: Some(String::new()),
            front: Some("front.png".to_owned()),
        };
        assert_eq!(empty_artwork.best(), Some("front.png"));

        assert_eq!(Sprites::default().best(), None);
    }

    #[test]
    fn has_category_matches_exactly() {
        let entry = CatalogEntry::from_api(String::new(), bulbasaur(), None);
        assert!(entry.has_category("grass"));
        assert!(!entry.has_category("gras"));
        assert!(!entry.has_category("fire"));
    }
}
