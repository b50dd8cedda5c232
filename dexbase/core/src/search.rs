use crate::encounter::Status;
use crate::{Catalog, Color, Encounters, Pokemon, Series};

/// A Pokémon in the list, with a badge per series in scope where it
/// appears.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub pokemon: &'a Pokemon,
    pub badges: Vec<Badge<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Badge<'a> {
    pub series: &'a Series,
    pub status: Status,
    pub color: Color,
}

/// The Pokémon to list, by ascending number.
///
/// A Pokémon is listed when its name contains `query` and it has an
/// encounter record, of any status, in at least one of `groups`. Matching
/// is a plain case-sensitive substring test.
pub fn visible<'a>(
    catalog: &'a Catalog,
    encounters: &Encounters,
    groups: &[&'a Series],
    query: &str,
) -> Vec<Entry<'a>> {
    let query = query.trim();

    let mut entries: Vec<_> = catalog
        .pokemon
        .values()
        .iter()
        .filter(|pokemon| query.is_empty() || pokemon.name.contains(query))
        .filter_map(|pokemon| {
            let badges: Vec<_> = groups
                .iter()
                .copied()
                .enumerate()
                .filter_map(|(i, series)| {
                    let status = encounters.status_for(pokemon.number, &series.id)?;

                    Some(Badge {
                        series,
                        status,
                        color: catalog.color_of(&series.id, i),
                    })
                })
                .collect();

            if badges.is_empty() {
                return None;
            }

            Some(Entry { pokemon, badges })
        })
        .collect();

    entries.sort_by_key(|entry| entry.pokemon.number);

    log::debug!(
        "{} of {} Pokémon visible in {} series (query: {query:?})",
        entries.len(),
        catalog.pokemon.len(),
        groups.len()
    );

    entries
}
