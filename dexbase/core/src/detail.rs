use crate::color;
use crate::encounter::{GameEncounter, Status};
use crate::evolution::{self, Links};
use crate::{Catalog, Color, Encounters, Game, Pokemon, Selection, Series};

/// Everything the detail and capture panes show for one Pokémon.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail<'a> {
    pub pokemon: &'a Pokemon,
    pub capture: Capture<'a>,
    pub evolution: Links,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Capture<'a> {
    NoData,
    Series(Vec<SeriesCapture<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCapture<'a> {
    pub series: &'a Series,
    pub color: Color,
    pub games: Vec<GameCapture<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameCapture<'a> {
    pub game: &'a Game,
    pub status: Status,
    pub color: Color,
    pub special_methods: &'a [String],
    pub locations: Locations<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Locations<'a> {
    Known(&'a [String]),
    Unknown,
}

impl<'a> Detail<'a> {
    /// The detail of the selected Pokémon, if it exists.
    pub fn selected(
        catalog: &'a Catalog,
        encounters: &'a Encounters,
        selection: &Selection,
        groups: &[&'a Series],
    ) -> Option<Self> {
        let pokemon = catalog.pokemon(selection.selected?)?;

        Some(project(catalog, encounters, pokemon, groups))
    }
}

impl Capture<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Capture::NoData)
    }
}

pub fn project<'a>(
    catalog: &'a Catalog,
    encounters: &'a Encounters,
    pokemon: &'a Pokemon,
    groups: &[&'a Series],
) -> Detail<'a> {
    let boxes: Vec<_> = groups
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(i, series)| {
            let encounter = encounters.series_for(pokemon.number, &series.id)?;
            let color = catalog.color_of(&series.id, i);

            let games = series
                .versions
                .iter()
                .map(|game| match encounter.versions.get(&game.id) {
                    Some(row) => game_capture(game, row, color),
                    None => GameCapture {
                        game,
                        status: Status::Unknown,
                        color: color::UNKNOWN,
                        special_methods: &[],
                        locations: Locations::Unknown,
                    },
                })
                .collect();

            Some(SeriesCapture {
                series,
                color,
                games,
            })
        })
        .collect();

    Detail {
        pokemon,
        capture: if boxes.is_empty() {
            Capture::NoData
        } else {
            Capture::Series(boxes)
        },
        evolution: evolution::links(encounters, pokemon, groups),
    }
}

fn game_capture<'a>(game: &'a Game, row: &'a GameEncounter, color: Color) -> GameCapture<'a> {
    GameCapture {
        game,
        status: row.status,
        color: if row.status == Status::Unknown {
            color::UNKNOWN
        } else {
            color
        },
        special_methods: &row.special_methods,
        locations: if row.locations.is_empty() {
            Locations::Unknown
        } else {
            Locations::Known(&row.locations)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::{Entry, SeriesEncounter};
    use crate::game;
    use crate::pokemon::{Evolution, Number, Stats};
    use crate::series::{self, Generation};

    use std::collections::BTreeMap;

    fn bulbasaur() -> Pokemon {
        Pokemon {
            number: Number::new(1),
            name: "이상해씨".to_owned(),
            generation: None,
            types: vec!["풀".to_owned(), "독".to_owned()],
            abilities: vec!["심록".to_owned()],
            height_m: 0.7,
            weight_kg: 6.9,
            base_stats: Stats {
                hp: 45,
                atk: 49,
                def: 49,
                spa: 65,
                spd: 65,
                spe: 45,
            },
            evolution: Evolution {
                prev: None,
                next: vec![Number::new(2)],
            },
        }
    }

    fn series(id: &str, games: &[&str]) -> Series {
        Series {
            id: series::Id::new(id),
            label: id.to_owned(),
            generation: Generation::new(1),
            versions: games
                .iter()
                .map(|game| Game {
                    id: game::Id::new(*game),
                    label: game.to_uppercase(),
                })
                .collect(),
        }
    }

    fn fixture() -> (Catalog, Encounters) {
        let catalog = Catalog::new(
            vec![
                series("red-blue", &["red", "blue"]),
                series("yellow", &["yellow"]),
            ],
            vec![bulbasaur()],
        );

        let red_blue = SeriesEncounter {
            status: Status::Available,
            versions: BTreeMap::from([
                (
                    game::Id::new("red"),
                    GameEncounter {
                        status: Status::Available,
                        locations: vec!["태초마을".to_owned()],
                        special_methods: vec!["선물".to_owned()],
                    },
                ),
                (
                    game::Id::new("blue"),
                    GameEncounter {
                        status: Status::Unknown,
                        locations: Vec::new(),
                        special_methods: Vec::new(),
                    },
                ),
            ]),
        };

        let encounters = Encounters::new(BTreeMap::from([(
            Number::new(1),
            Entry {
                version_groups: BTreeMap::from([(series::Id::new("red-blue"), red_blue)]),
            },
        )]));

        (catalog, encounters)
    }

    #[test]
    fn series_without_record_are_omitted() {
        let (catalog, encounters) = fixture();
        let groups: Vec<_> = catalog.games.iter().collect();
        let pokemon = catalog.pokemon(Number::new(1)).unwrap();

        let detail = project(&catalog, &encounters, pokemon, &groups);

        let Capture::Series(boxes) = &detail.capture else {
            panic!("expected capture data");
        };

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].series.id.as_str(), "red-blue");
        assert_eq!(boxes[0].color, catalog.color_of(&groups[0].id, 0));
    }

    #[test]
    fn rows_follow_series_game_order() {
        let (catalog, encounters) = fixture();
        let groups = vec![&catalog.games[0]];
        let pokemon = catalog.pokemon(Number::new(1)).unwrap();

        let detail = project(&catalog, &encounters, pokemon, &groups);

        let Capture::Series(boxes) = &detail.capture else {
            panic!("expected capture data");
        };
        let red = &boxes[0].games[0];
        let blue = &boxes[0].games[1];

        assert_eq!(red.game.id.as_str(), "red");
        assert_eq!(red.status, Status::Available);
        assert_eq!(red.color, boxes[0].color);
        assert_eq!(red.special_methods, ["선물"]);
        assert_eq!(red.locations, Locations::Known(&["태초마을".to_owned()]));

        assert_eq!(blue.game.id.as_str(), "blue");
        assert_eq!(blue.color, color::UNKNOWN);
        assert_eq!(blue.locations, Locations::Unknown);
    }

    #[test]
    fn missing_game_entry_is_unknown() {
        let (catalog, _) = fixture();
        let groups = vec![&catalog.games[0]];

        let encounters = Encounters::new(BTreeMap::from([(
            Number::new(1),
            Entry {
                version_groups: BTreeMap::from([(
                    series::Id::new("red-blue"),
                    SeriesEncounter {
                        status: Status::Available,
                        versions: BTreeMap::new(),
                    },
                )]),
            },
        )]));

        let pokemon = catalog.pokemon(Number::new(1)).unwrap();
        let detail = project(&catalog, &encounters, pokemon, &groups);

        let Capture::Series(boxes) = &detail.capture else {
            panic!("expected capture data");
        };

        assert_eq!(boxes[0].games.len(), 2);
        assert!(boxes[0].games.iter().all(|game| {
            game.status == Status::Unknown
                && game.special_methods.is_empty()
                && game.locations == Locations::Unknown
        }));
    }

    #[test]
    fn no_capture_data_at_all() {
        let (catalog, encounters) = fixture();
        let groups = vec![&catalog.games[1]];
        let pokemon = catalog.pokemon(Number::new(1)).unwrap();

        let detail = project(&catalog, &encounters, pokemon, &groups);

        assert!(detail.capture.is_empty());
        assert_eq!(detail.pokemon.base_stats.total(), 318);
    }

    #[test]
    fn selected_detail() {
        let (catalog, encounters) = fixture();
        let groups = vec![&catalog.games[0]];

        let mut selection = Selection::initial(&catalog);
        assert!(Detail::selected(&catalog, &encounters, &selection, &groups).is_none());

        selection.selected = Some(Number::new(1));
        let detail = Detail::selected(&catalog, &encounters, &selection, &groups).unwrap();
        assert_eq!(detail.pokemon.number.to_string(), "0001");
        assert_eq!(detail.evolution.next.map(|link| link.number), Some(Number::new(2)));

        selection.selected = Some(Number::new(999));
        assert!(Detail::selected(&catalog, &encounters, &selection, &groups).is_none());
    }
}
