use crate::color;
use crate::pokemon;
use crate::series::{self, Generation};
use crate::{Color, Map, Pokemon, Series};

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// The games and Pokémon known to the Pokédex.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "Document", into = "Document")]
pub struct Catalog {
    pub games: Arc<[Series]>,
    pub pokemon: Map<pokemon::Number, Pokemon>,
}

impl Catalog {
    pub fn new(games: impl Into<Arc<[Series]>>, pokemon: impl Into<Arc<[Pokemon]>>) -> Self {
        Self {
            games: games.into(),
            pokemon: Map::new(pokemon, |pokemon| pokemon.number),
        }
    }

    pub fn pokemon(&self, number: pokemon::Number) -> Option<&Pokemon> {
        self.pokemon.get(&number)
    }

    pub fn series(&self, id: &series::Id) -> Option<&Series> {
        self.games.iter().find(|series| &series.id == id)
    }

    /// Every generation with at least one series, in ascending order.
    pub fn generations(&self) -> Vec<Generation> {
        BTreeSet::from_iter(self.games.iter().map(|series| series.generation))
            .into_iter()
            .collect()
    }

    pub fn color_of(&self, series: &series::Id, fallback: usize) -> Color {
        color::of(&self.games, series, fallback)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("games", &self.games.len())
            .field("pokemon", &self.pokemon.len())
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default = "schema_version")]
    schema_version: u32,
    #[serde(default)]
    games: Vec<Series>,
    #[serde(default)]
    pokemon: Vec<Pokemon>,
}

fn schema_version() -> u32 {
    1
}

impl From<Document> for Catalog {
    fn from(document: Document) -> Self {
        Catalog::new(document.games, document.pokemon)
    }
}

impl From<Catalog> for Document {
    fn from(catalog: Catalog) -> Self {
        Document {
            schema_version: schema_version(),
            games: catalog.games.to_vec(),
            pokemon: catalog.pokemon.values().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "schemaVersion": 1,
        "locale": "ko-KR",
        "games": [
            { "versionGroupId": "red-blue", "label": "red-blue", "generation": 1,
              "versions": [{ "gameId": "red", "label": "레드" }, { "gameId": "blue", "label": "블루" }] },
            { "versionGroupId": "gold-silver", "label": "gold-silver", "generation": 2, "versions": [] },
            { "versionGroupId": "yellow", "label": "yellow", "generation": 1, "versions": [] }
        ],
        "pokemon": [
            { "dexNo": 4, "nameKo": "파이리" },
            { "dexNo": 1, "nameKo": "이상해씨" }
        ]
    }"#;

    #[test]
    fn parses_document() {
        let catalog: Catalog = serde_json::from_str(DOCUMENT).unwrap();

        assert_eq!(catalog.games.len(), 3);
        assert_eq!(catalog.games[0].versions.len(), 2);
        assert_eq!(
            catalog.pokemon(pokemon::Number::new(4)).map(Pokemon::name),
            Some("파이리")
        );
        assert!(catalog.pokemon(pokemon::Number::new(7)).is_none());
    }

    #[test]
    fn generations_are_distinct_and_sorted() {
        let catalog: Catalog = serde_json::from_str(DOCUMENT).unwrap();

        assert_eq!(
            catalog.generations(),
            [Generation::new(1), Generation::new(2)]
        );
    }

    #[test]
    fn series_lookup() {
        let catalog: Catalog = serde_json::from_str(DOCUMENT).unwrap();

        assert_eq!(
            catalog
                .series(&series::Id::new("yellow"))
                .map(|series| series.generation),
            Some(Generation::new(1))
        );
        assert!(catalog.series(&series::Id::new("x-y")).is_none());
    }
}
