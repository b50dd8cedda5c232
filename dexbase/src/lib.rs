pub use dexbase_core as core;

pub mod config;
pub mod database;
pub mod error;
pub mod generate;

pub use crate::core::{
    catalog, color, detail, encounter, evolution, game, locale, pokemon, search, selection, series,
};
pub use crate::core::{
    Catalog, Color, Detail, Encounters, Game, Locale, Pokemon, Selection, Series, Translations,
};

pub use config::Config;
pub use database::Database;
pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
