//! Capture availability per Pokémon, series and game.
//!
//! [`Encounters`] is the only way into the encounter table. A missing key at
//! any level means "no data for that scope", which is not the same as an
//! explicit [`Status::Unknown`].
use crate::game;
use crate::pokemon;
use crate::series;

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Status {
    Available,
    #[default]
    Unknown,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Unknown => "unknown",
        }
    }

    pub fn is_available(self) -> bool {
        self == Status::Available
    }
}

impl From<String> for Status {
    fn from(status: String) -> Self {
        match status.as_str() {
            "available" => Status::Available,
            _ => Status::Unknown,
        }
    }
}

impl From<Status> for &'static str {
    fn from(status: Status) -> Self {
        status.as_str()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub version_groups: BTreeMap<series::Id, SeriesEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesEncounter {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub versions: BTreeMap<game::Id, GameEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEncounter {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub special_methods: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Encounters {
    #[serde(rename = "encounters", default)]
    entries: BTreeMap<pokemon::Number, Entry>,
}

static NO_ENCOUNTERS: BTreeMap<series::Id, SeriesEncounter> = BTreeMap::new();

impl Encounters {
    pub fn new(entries: BTreeMap<pokemon::Number, Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every series a Pokémon has a record for. Empty when it has none.
    pub fn encounter_for(
        &self,
        pokemon: pokemon::Number,
    ) -> &BTreeMap<series::Id, SeriesEncounter> {
        self.entries
            .get(&pokemon)
            .map(|entry| &entry.version_groups)
            .unwrap_or(&NO_ENCOUNTERS)
    }

    pub fn series_for(
        &self,
        pokemon: pokemon::Number,
        series: &series::Id,
    ) -> Option<&SeriesEncounter> {
        self.encounter_for(pokemon).get(series)
    }

    pub fn status_for(&self, pokemon: pokemon::Number, series: &series::Id) -> Option<Status> {
        self.series_for(pokemon, series)
            .map(|encounter| encounter.status)
    }
}
