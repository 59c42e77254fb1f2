//! Wire records for the upstream `PokeAPI` responses.
//!
//! Only the fields the site renders are modelled; serde ignores the rest.
//! These records are converted into [`CatalogEntry`](crate::CatalogEntry)
//! as soon as they are decoded and never leave the fetch layer otherwise.

use serde::Deserialize;

use crate::entry::EntryReference;

/// Form feed, which the upstream flavor text uses as a soft line break.
const FORM_FEED: char = '\u{000C}';

/// Response of the listing endpoint (`GET /pokemon?limit=N`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListing {
    /// Total number of entries the API knows about.
    #[serde(default)]
    pub count: u32,
    /// The entry references on this listing page.
    pub results: Vec<EntryReference>,
}

/// A `{ "name": ..., "url": ... }` pointer to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiNamedResource {
    /// Resource name (e.g. `"grass"`, `"overgrow"`).
    pub name: String,
}

/// Full record from `GET /pokemon/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    /// Numeric id.
    pub id: u32,
    /// Lowercase API name.
    pub name: String,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: ApiSprites,
    /// Type slots, in slot order.
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Ability slots.
    #[serde(default)]
    pub abilities: Vec<ApiAbilitySlot>,
    /// Base stats.
    #[serde(default)]
    pub stats: Vec<ApiStat>,
    /// Learnable moves.
    #[serde(default)]
    pub moves: Vec<ApiMoveSlot>,
}

/// Sprite block of a pokemon record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    /// Small front-facing sprite.
    pub front_default: Option<String>,
    /// Alternative artwork sets.
    #[serde(default)]
    pub other: ApiOtherSprites,
}

/// The `sprites.other` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiOtherSprites {
    /// High-resolution official artwork.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ApiArtwork,
}

/// A single artwork variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiArtwork {
    /// Front-facing artwork URL.
    pub front_default: Option<String>,
}

/// One entry of the `types` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    /// The referenced type.
    #[serde(rename = "type")]
    pub kind: ApiNamedResource,
}

/// One entry of the `abilities` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAbilitySlot {
    /// The referenced ability.
    pub ability: ApiNamedResource,
    /// Whether this is a hidden ability.
    #[serde(default)]
    pub is_hidden: bool,
}

/// One entry of the `stats` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStat {
    /// Base value (0-255 by convention).
    pub base_stat: u32,
    /// The referenced stat.
    pub stat: ApiNamedResource,
}

/// One entry of the `moves` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMoveSlot {
    /// The referenced move.
    #[serde(rename = "move")]
    pub move_ref: ApiNamedResource,
}

/// Record from `GET /pokemon-species/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSpecies {
    /// Localized flavor text entries, across game versions.
    #[serde(default)]
    pub flavor_text_entries: Vec<ApiFlavorText>,
}

/// One localized flavor text.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFlavorText {
    /// The raw text, which may contain form feeds and newlines.
    pub flavor_text: String,
    /// The language the text is written in.
    pub language: ApiNamedResource,
}

impl ApiSpecies {
    /// Extract the description shown on the detail page.
    ///
    /// Picks the first flavor text whose language matches `language` and
    /// replaces form feeds with spaces. Returns `None` when no entry is in
    /// that language.
    pub fn description(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.replace(FORM_FEED, " "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species_json() -> serde_json::Value {
        serde_json::json!({
            "flavor_text_entries": [
                {
                    "flavor_text": "Una rara semilla\u{000C}le fue plantada.",
                    "language": {"name": "es", "url": "https://pokeapi.co/api/v2/language/7/"}
                },
                {
                    "flavor_text": "A strange seed was\u{000C}planted on its\nback at birth.",
                    "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}
                },
                {
                    "flavor_text": "Second english entry.",
                    "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}
                }
            ]
        })
    }

    #[test]
    fn description_picks_first_matching_language() {
        let species: ApiSpecies = serde_json::from_value(species_json()).unwrap_or_default();
        let description = species.description("en");
        assert_eq!(
            description.as_deref(),
            Some("A strange seed was planted on its\nback at birth.")
        );
    }

    #[test]
    fn description_strips_form_feeds() {
        let species: ApiSpecies = serde_json::from_value(species_json()).unwrap_or_default();
        let description = species.description("es").unwrap_or_default();
        assert!(!description.contains('\u{000C}'));
        assert_eq!(description, "Una rara semilla le fue plantada.");
    }

    #[test]
    fn description_absent_without_language() {
        let species: ApiSpecies = serde_json::from_value(species_json()).unwrap_or_default();
        assert_eq!(species.description("ja"), None);
        assert_eq!(ApiSpecies::default().description("en"), None);
    }

    #[test]
    fn pokemon_tolerates_missing_artwork() {
        let json = serde_json::json!({
            "id": 10_001,
            "name": "deoxys-attack",
            "sprites": {"front_default": null, "other": {}},
            "types": [{"slot": 1, "type": {"name": "psychic", "url": ""}}],
            "height": 17,
            "weight": 608
        });
        let record: Result<ApiPokemon, _> = serde_json::from_value(json);
        assert!(record.is_ok(), "decode failed: {record:?}");
        let record = match record {
            Ok(r) => r,
            Err(_) => return,
        };
        assert_eq!(record.sprites.other.official_artwork.front_default, None);
        assert!(record.moves.is_empty());
    }
}
