//! Builds the Pokédex datasets out of the PokeAPI CSV dump.
use crate::encounter::{self, GameEncounter, SeriesEncounter, Status};
use crate::game;
use crate::pokemon::{self, Evolution, Stats};
use crate::series::{self, Generation};
use crate::{Catalog, Encounters, Error, Game, Pokemon, Series};

use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, LazyLock};
use std::time::Duration;

const BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/pokeapi/master/data/v2/csv";

const KOREAN: u32 = 3;

const MAIN_SERIES: &[&str] = &[
    "red-blue",
    "yellow",
    "gold-silver",
    "crystal",
    "ruby-sapphire",
    "emerald",
    "firered-leafgreen",
    "diamond-pearl",
    "platinum",
    "heartgold-soulsilver",
    "black-white",
    "black-2-white-2",
    "x-y",
    "omega-ruby-alpha-sapphire",
    "sun-moon",
    "ultra-sun-ultra-moon",
    "lets-go-pikachu-lets-go-eevee",
    "sword-shield",
    "brilliant-diamond-and-shining-pearl",
    "legends-arceus",
    "scarlet-violet",
];

/// Encounter method identifiers worth a tag, by substring.
const SPECIAL_METHODS: &[(&str, &str)] = &[
    ("poke-radar", "포켓트레"),
    ("slot2", "GBA 슬롯 장착"),
    ("swarm", "대량발생"),
    ("radio-hoenn", "호연 사운드"),
    ("radio-sinnoh", "신오 사운드"),
];

const UNKNOWN_NAME: &str = "알수없음";
const UNKNOWN_LOCATION: &str = "미확인";

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Build reqwest client")
});

/// The subset of the PokeAPI dump the Pokédex needs.
#[derive(Debug, Default)]
pub struct Dump {
    pub pokemon: Vec<row::Pokemon>,
    pub species: Vec<row::Species>,
    pub species_names: Vec<row::Name>,
    pub pokemon_types: Vec<row::PokemonType>,
    pub type_names: Vec<row::Name>,
    pub pokemon_abilities: Vec<row::PokemonAbility>,
    pub ability_names: Vec<row::Name>,
    pub pokemon_stats: Vec<row::PokemonStat>,
    pub stats: Vec<row::Stat>,
    pub versions: Vec<row::Version>,
    pub version_names: Vec<row::Name>,
    pub version_groups: Vec<row::VersionGroup>,
    pub encounters: Vec<row::Encounter>,
    pub location_areas: Vec<row::LocationArea>,
    pub location_names: Vec<row::Name>,
    pub encounter_slots: Vec<row::EncounterSlot>,
    pub encounter_methods: Vec<row::EncounterMethod>,
}

impl Dump {
    pub async fn download() -> Result<Self, Error> {
        let (
            pokemon,
            species,
            species_names,
            pokemon_types,
            type_names,
            pokemon_abilities,
            ability_names,
            pokemon_stats,
            stats,
            versions,
            version_names,
            version_groups,
            encounters,
            location_areas,
            location_names,
            encounter_slots,
            encounter_methods,
        ) = futures_util::try_join!(
            fetch("pokemon.csv"),
            fetch("pokemon_species.csv"),
            fetch("pokemon_species_names.csv"),
            fetch("pokemon_types.csv"),
            fetch("type_names.csv"),
            fetch("pokemon_abilities.csv"),
            fetch("ability_names.csv"),
            fetch("pokemon_stats.csv"),
            fetch("stats.csv"),
            fetch("versions.csv"),
            fetch("version_names.csv"),
            fetch("version_groups.csv"),
            fetch("encounters.csv"),
            fetch("location_areas.csv"),
            fetch("location_names.csv"),
            fetch("encounter_slots.csv"),
            fetch("encounter_methods.csv"),
        )?;

        Ok(Self {
            pokemon: parse("pokemon.csv", &pokemon)?,
            species: parse("pokemon_species.csv", &species)?,
            species_names: parse("pokemon_species_names.csv", &species_names)?,
            pokemon_types: parse("pokemon_types.csv", &pokemon_types)?,
            type_names: parse("type_names.csv", &type_names)?,
            pokemon_abilities: parse("pokemon_abilities.csv", &pokemon_abilities)?,
            ability_names: parse("ability_names.csv", &ability_names)?,
            pokemon_stats: parse("pokemon_stats.csv", &pokemon_stats)?,
            stats: parse("stats.csv", &stats)?,
            versions: parse("versions.csv", &versions)?,
            version_names: parse("version_names.csv", &version_names)?,
            version_groups: parse("version_groups.csv", &version_groups)?,
            encounters: parse("encounters.csv", &encounters)?,
            location_areas: parse("location_areas.csv", &location_areas)?,
            location_names: parse("location_names.csv", &location_names)?,
            encounter_slots: parse("encounter_slots.csv", &encounter_slots)?,
            encounter_methods: parse("encounter_methods.csv", &encounter_methods)?,
        })
    }
}

async fn fetch(file: &'static str) -> Result<Bytes, Error> {
    let url = format!("{BASE_URL}/{file}");

    log::info!("Downloading {url}");
    let response = CLIENT.get(&url).send().await?;

    Ok(response.error_for_status()?.bytes().await?)
}

pub fn parse<T: DeserializeOwned>(file: &'static str, bytes: &[u8]) -> Result<Vec<T>, Error> {
    csv::Reader::from_reader(bytes)
        .deserialize()
        .collect::<Result<_, _>>()
        .map_err(|error| Error::InvalidCsv {
            file,
            error: Arc::new(error),
        })
}

/// Turns the raw dump into the catalog and encounter documents.
pub fn normalize(dump: &Dump) -> (Catalog, Encounters) {
    let games = series(dump);
    let pokemon = pokemon(dump);
    let encounters = encounters(dump);

    log::info!(
        "Normalized {} Pokémon, {} series and {} encounter records",
        pokemon.len(),
        games.len(),
        encounters.len()
    );

    (Catalog::new(games, pokemon), encounters)
}

fn series(dump: &Dump) -> Vec<Series> {
    let version_names = korean(&dump.version_names);

    dump.version_groups
        .iter()
        .filter(|group| MAIN_SERIES.contains(&group.identifier.as_str()))
        .map(|group| Series {
            id: series::Id::new(&group.identifier),
            label: group.identifier.clone(),
            generation: Generation::new(group.generation_id),
            versions: dump
                .versions
                .iter()
                .filter(|version| version.version_group_id == group.id)
                .map(|version| Game {
                    id: game::Id::new(&version.identifier),
                    label: version_names
                        .get(&version.id)
                        .cloned()
                        .unwrap_or_else(|| version.identifier.clone()),
                })
                .collect(),
        })
        .collect()
}

fn pokemon(dump: &Dump) -> Vec<Pokemon> {
    let names = korean(&dump.species_names);
    let type_names = korean(&dump.type_names);
    let ability_names = korean(&dump.ability_names);

    let forms: HashMap<u32, &row::Pokemon> =
        dump.pokemon.iter().map(|pokemon| (pokemon.id, pokemon)).collect();

    let mut types: HashMap<u32, Vec<String>> = HashMap::new();
    for row in &dump.pokemon_types {
        types.entry(row.pokemon_id).or_default().push(
            type_names
                .get(&row.type_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_NAME.to_owned()),
        );
    }

    let mut abilities: HashMap<u32, Vec<String>> = HashMap::new();
    for row in &dump.pokemon_abilities {
        abilities.entry(row.pokemon_id).or_default().push(
            ability_names
                .get(&row.ability_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_NAME.to_owned()),
        );
    }

    let stat_keys: HashMap<u32, &str> = dump
        .stats
        .iter()
        .map(|stat| (stat.id, stat.identifier.as_str()))
        .collect();

    let mut stats: HashMap<u32, Stats> = HashMap::new();
    for row in &dump.pokemon_stats {
        let stats = stats.entry(row.pokemon_id).or_default();

        match stat_keys.get(&row.stat_id).copied() {
            Some("hp") => stats.hp = row.base_stat,
            Some("attack") => stats.atk = row.base_stat,
            Some("defense") => stats.def = row.base_stat,
            Some("special-attack") => stats.spa = row.base_stat,
            Some("special-defense") => stats.spd = row.base_stat,
            Some("speed") => stats.spe = row.base_stat,
            _ => {}
        }
    }

    let species: BTreeSet<u32> = dump
        .species
        .iter()
        .filter(|species| forms.contains_key(&species.id))
        .map(|species| species.id)
        .collect();

    let mut next: BTreeMap<u32, Vec<pokemon::Number>> = BTreeMap::new();
    for row in &dump.species {
        if let Some(from) = row.evolves_from_species_id {
            if species.contains(&row.id) {
                next.entry(from)
                    .or_default()
                    .push(pokemon::Number::new(row.id));
            }
        }
    }

    for stages in next.values_mut() {
        stages.sort();
    }

    dump.species
        .iter()
        .filter_map(|row| {
            let form = forms.get(&row.id)?;

            Some(Pokemon {
                number: pokemon::Number::new(row.id),
                name: names
                    .get(&row.id)
                    .cloned()
                    .unwrap_or_else(|| form.identifier.clone()),
                generation: Some(Generation::new(row.generation_id)),
                types: types.remove(&row.id).unwrap_or_default(),
                abilities: abilities.remove(&row.id).unwrap_or_default(),
                height_m: f64::from(form.height) / 10.0,
                weight_kg: f64::from(form.weight) / 10.0,
                base_stats: stats.remove(&row.id).unwrap_or_default(),
                evolution: Evolution {
                    prev: row
                        .evolves_from_species_id
                        .filter(|from| species.contains(from))
                        .map(pokemon::Number::new),
                    next: next.remove(&row.id).unwrap_or_default(),
                },
            })
        })
        .collect()
}

fn encounters(dump: &Dump) -> Encounters {
    let groups: HashMap<u32, &str> = dump
        .version_groups
        .iter()
        .filter(|group| MAIN_SERIES.contains(&group.identifier.as_str()))
        .map(|group| (group.id, group.identifier.as_str()))
        .collect();

    let versions: HashMap<u32, &row::Version> = dump
        .versions
        .iter()
        .map(|version| (version.id, version))
        .collect();

    let area_locations: HashMap<u32, u32> = dump
        .location_areas
        .iter()
        .map(|area| (area.id, area.location_id))
        .collect();

    let location_names = korean(&dump.location_names);

    let slot_methods: HashMap<u32, u32> = dump
        .encounter_slots
        .iter()
        .map(|slot| (slot.id, slot.encounter_method_id))
        .collect();

    let methods: HashMap<u32, &str> = dump
        .encounter_methods
        .iter()
        .map(|method| (method.id, method.identifier.as_str()))
        .collect();

    let mut entries: BTreeMap<pokemon::Number, encounter::Entry> = BTreeMap::new();

    for row in &dump.encounters {
        let Some(version) = versions.get(&row.version_id) else {
            continue;
        };

        let Some(group) = groups.get(&version.version_group_id) else {
            continue;
        };

        let series = entries
            .entry(pokemon::Number::new(row.pokemon_id))
            .or_default()
            .version_groups
            .entry(series::Id::new(*group))
            .or_insert_with(|| SeriesEncounter {
                status: Status::Available,
                versions: BTreeMap::new(),
            });

        let game = series
            .versions
            .entry(game::Id::new(&version.identifier))
            .or_insert_with(|| GameEncounter {
                status: Status::Available,
                locations: Vec::new(),
                special_methods: Vec::new(),
            });

        let location = area_locations
            .get(&row.location_area_id)
            .and_then(|location| location_names.get(location))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_owned());

        if !game.locations.contains(&location) {
            game.locations.push(location);
        }

        let method = slot_methods
            .get(&row.encounter_slot_id)
            .and_then(|method| methods.get(method))
            .copied()
            .unwrap_or("unknown");

        for (key, label) in SPECIAL_METHODS {
            if method.contains(key) && !game.special_methods.iter().any(|tag| tag == label) {
                game.special_methods.push((*label).to_owned());
            }
        }
    }

    Encounters::new(entries)
}

fn korean(names: &[row::Name]) -> HashMap<u32, String> {
    names
        .iter()
        .filter(|name| name.local_language_id == KOREAN)
        .map(|name| (name.id, name.name.clone()))
        .collect()
}

/// Rows of the PokeAPI CSV files. Columns not listed are ignored.
pub mod row {
    use super::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Pokemon {
        pub id: u32,
        pub identifier: String,
        pub height: u32,
        pub weight: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Species {
        pub id: u32,
        pub generation_id: u32,
        pub evolves_from_species_id: Option<u32>,
    }

    /// A localized name of anything: species, types, abilities, versions or
    /// locations.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Name {
        #[serde(
            alias = "pokemon_species_id",
            alias = "type_id",
            alias = "ability_id",
            alias = "version_id",
            alias = "location_id"
        )]
        pub id: u32,
        pub local_language_id: u32,
        pub name: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PokemonType {
        pub pokemon_id: u32,
        pub type_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PokemonAbility {
        pub pokemon_id: u32,
        pub ability_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PokemonStat {
        pub pokemon_id: u32,
        pub stat_id: u32,
        pub base_stat: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Stat {
        pub id: u32,
        pub identifier: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Version {
        pub id: u32,
        pub version_group_id: u32,
        pub identifier: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct VersionGroup {
        pub id: u32,
        pub identifier: String,
        pub generation_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Encounter {
        pub version_id: u32,
        pub location_area_id: u32,
        pub encounter_slot_id: u32,
        pub pokemon_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct LocationArea {
        pub id: u32,
        pub location_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct EncounterSlot {
        pub id: u32,
        pub encounter_method_id: u32,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct EncounterMethod {
        pub id: u32,
        pub identifier: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump() -> Dump {
        Dump {
            pokemon: parse(
                "pokemon.csv",
                b"id,identifier,species_id,height,weight,base_experience,order,is_default\n\
                  1,bulbasaur,1,7,69,64,1,1\n\
                  2,ivysaur,2,10,130,142,2,1\n\
                  3,venusaur,3,20,1000,236,3,1\n",
            )
            .unwrap(),
            species: parse(
                "pokemon_species.csv",
                b"id,identifier,generation_id,evolves_from_species_id\n\
                  1,bulbasaur,1,\n\
                  2,ivysaur,1,1\n\
                  3,venusaur,1,2\n\
                  4,charmander,1,\n",
            )
            .unwrap(),
            species_names: parse(
                "pokemon_species_names.csv",
                b"pokemon_species_id,local_language_id,name,genus\n\
                  1,3,\xec\x9d\xb4\xec\x83\x81\xed\x95\xb4\xec\x94\xa8,\n\
                  1,9,Bulbasaur,Seed\n",
            )
            .unwrap(),
            pokemon_types: parse(
                "pokemon_types.csv",
                b"pokemon_id,type_id,slot\n1,12,1\n1,4,2\n",
            )
            .unwrap(),
            type_names: parse(
                "type_names.csv",
                "type_id,local_language_id,name\n12,3,풀\n".as_bytes(),
            )
            .unwrap(),
            pokemon_stats: parse(
                "pokemon_stats.csv",
                b"pokemon_id,stat_id,base_stat,effort\n1,1,45,0\n1,6,45,0\n",
            )
            .unwrap(),
            stats: parse(
                "stats.csv",
                b"id,damage_class_id,identifier,is_battle_only,game_index\n\
                  1,,hp,0,1\n\
                  6,,speed,0,4\n",
            )
            .unwrap(),
            versions: parse(
                "versions.csv",
                b"id,version_group_id,identifier\n1,1,red\n2,1,blue\n3,26,colosseum\n",
            )
            .unwrap(),
            version_names: parse(
                "version_names.csv",
                "version_id,local_language_id,name\n1,3,레드\n".as_bytes(),
            )
            .unwrap(),
            version_groups: parse(
                "version_groups.csv",
                b"id,identifier,generation_id,order\n1,red-blue,1,1\n26,colosseum,3,26\n",
            )
            .unwrap(),
            encounters: parse(
                "encounters.csv",
                b"id,version_id,location_area_id,encounter_slot_id,pokemon_id,min_level,max_level\n\
                  1,1,10,100,1,5,5\n\
                  2,1,10,101,1,5,5\n\
                  3,1,99,100,1,5,5\n\
                  4,3,10,100,2,5,5\n",
            )
            .unwrap(),
            location_areas: parse(
                "location_areas.csv",
                b"id,location_id,game_index,identifier\n10,86,1,\n",
            )
            .unwrap(),
            location_names: parse(
                "location_names.csv",
                "location_id,local_language_id,name,subtitle\n86,3,태초마을,\n".as_bytes(),
            )
            .unwrap(),
            encounter_slots: parse(
                "encounter_slots.csv",
                b"id,version_group_id,encounter_method_id,slot,rarity\n100,1,1,,\n101,1,2,,\n",
            )
            .unwrap(),
            encounter_methods: parse(
                "encounter_methods.csv",
                b"id,identifier,order\n1,walk,1\n2,swarm-grass,2\n",
            )
            .unwrap(),
            ..Dump::default()
        }
    }

    #[test]
    fn keeps_main_series_only() {
        let (catalog, _) = normalize(&dump());

        assert_eq!(catalog.games.len(), 1);
        assert_eq!(catalog.games[0].id.as_str(), "red-blue");
        assert_eq!(catalog.games[0].generation, Generation::new(1));
        assert_eq!(
            catalog.games[0]
                .versions
                .iter()
                .map(|game| game.label.as_str())
                .collect::<Vec<_>>(),
            ["레드", "blue"]
        );
    }

    #[test]
    fn localizes_pokemon() {
        let (catalog, _) = normalize(&dump());

        let bulbasaur = catalog.pokemon(pokemon::Number::new(1)).unwrap();
        assert_eq!(bulbasaur.name, "이상해씨");
        assert_eq!(bulbasaur.types, ["풀", UNKNOWN_NAME]);
        assert_eq!(bulbasaur.height_m, 0.7);
        assert_eq!(bulbasaur.weight_kg, 6.9);
        assert_eq!(bulbasaur.base_stats.hp, 45);
        assert_eq!(bulbasaur.base_stats.spe, 45);
        assert_eq!(bulbasaur.base_stats.atk, 0);

        let ivysaur = catalog.pokemon(pokemon::Number::new(2)).unwrap();
        assert_eq!(ivysaur.name, "ivysaur");

        assert!(catalog.pokemon(pokemon::Number::new(4)).is_none());
    }

    #[test]
    fn links_evolutions() {
        let (catalog, _) = normalize(&dump());

        let ivysaur = catalog.pokemon(pokemon::Number::new(2)).unwrap();
        assert_eq!(ivysaur.evolution.prev, Some(pokemon::Number::new(1)));
        assert_eq!(ivysaur.evolution.next, [pokemon::Number::new(3)]);

        let venusaur = catalog.pokemon(pokemon::Number::new(3)).unwrap();
        assert!(venusaur.evolution.next.is_empty());
    }

    #[test]
    fn collects_encounters() {
        let (_, encounters) = normalize(&dump());

        let red = &encounters
            .series_for(pokemon::Number::new(1), &series::Id::new("red-blue"))
            .unwrap()
            .versions["red"];

        assert_eq!(red.status, Status::Available);
        assert_eq!(red.locations, ["태초마을", UNKNOWN_LOCATION]);
        assert_eq!(red.special_methods, ["대량발생"]);

        assert!(
            encounters
                .encounter_for(pokemon::Number::new(2))
                .is_empty()
        );
    }
}
