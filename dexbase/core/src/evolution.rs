use crate::pokemon;
use crate::{Encounters, Pokemon, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub number: pokemon::Number,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Links {
    pub prev: Option<Link>,
    pub next: Option<Link>,
}

/// The previous and next stage of a Pokémon, and whether each can be caught.
///
/// Availability is decided by the first series in `groups` only, even when a
/// generation spans several series. Only the first of many next stages is
/// linked.
pub fn links(encounters: &Encounters, pokemon: &Pokemon, groups: &[&Series]) -> Links {
    let pivot = groups.first();

    let link = |number: pokemon::Number| Link {
        number,
        available: pivot.is_some_and(|series| {
            encounters
                .status_for(number, &series.id)
                .is_some_and(|status| status.is_available())
        }),
    };

    Links {
        prev: pokemon.evolution.prev.map(link),
        next: pokemon.evolution.next.first().copied().map(link),
    }
}
