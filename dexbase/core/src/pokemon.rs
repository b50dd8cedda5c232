use crate::series::Generation;

use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    #[serde(rename = "dexNo")]
    pub number: Number,
    #[serde(rename = "nameKo")]
    pub name: String,
    #[serde(default, rename = "gen", skip_serializing_if = "Option::is_none")]
    pub generation: Option<Generation>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub height_m: f64,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub base_stats: Stats,
    #[serde(default)]
    pub evolution: Evolution,
}

impl Pokemon {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A National Pokédex number.
///
/// Displays zero-padded to four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(pub(crate) u32);

impl Number {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl Stats {
    pub fn total(self) -> u32 {
        self.hp + self.atk + self.def + self.spa + self.spd + self.spe
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Evolution {
    pub prev: Option<Number>,
    pub next: Vec<Number>,
}
