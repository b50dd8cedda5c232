use crate::pokemon;
use crate::series::{self, Generation};
use crate::{Catalog, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Generation,
    Series,
}

impl ViewMode {
    pub const ALL: &[Self] = &[Self::Generation, Self::Series];

    /// The translation key of the mode's label.
    pub fn key(self) -> &'static str {
        match self {
            ViewMode::Generation => "modeGeneration",
            ViewMode::Series => "modeSeries",
        }
    }
}

/// Everything the user has chosen so far.
///
/// The UI produces a new value on every input; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub mode: ViewMode,
    pub generation: Generation,
    pub series: series::Id,
    pub search: String,
    pub selected: Option<pokemon::Number>,
}

impl Selection {
    /// The lowest generation and the first series, with nothing searched or
    /// selected.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            mode: ViewMode::Generation,
            generation: catalog.generations().first().copied().unwrap_or_default(),
            series: catalog
                .games
                .first()
                .map(|series| series.id.clone())
                .unwrap_or_default(),
            search: String::new(),
            selected: None,
        }
    }

    /// The series in scope, in load order.
    ///
    /// A series id that no longer exists resolves to nothing.
    pub fn groups<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Series> {
        match self.mode {
            ViewMode::Generation => catalog
                .games
                .iter()
                .filter(|series| series.generation == self.generation)
                .collect(),
            ViewMode::Series => catalog
                .games
                .iter()
                .filter(|series| series.id == self.series)
                .take(1)
                .collect(),
        }
    }

    pub fn query(&self) -> &str {
        self.search.trim()
    }
}
