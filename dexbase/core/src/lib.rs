mod map;

pub mod catalog;
pub mod color;
pub mod detail;
pub mod encounter;
pub mod evolution;
pub mod game;
pub mod locale;
pub mod pokemon;
pub mod search;
pub mod selection;
pub mod series;

pub use catalog::Catalog;
pub use color::Color;
pub use detail::Detail;
pub use encounter::Encounters;
pub use game::Game;
pub use locale::{Locale, Translations};
pub use map::Map;
pub use pokemon::Pokemon;
pub use selection::Selection;
pub use series::Series;
