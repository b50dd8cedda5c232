use crate::detail;
use crate::search;
use crate::{Catalog, Color, Config, Detail, Encounters, Error, Selection, Series, Translations};

use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// The three datasets the Pokédex is built from.
#[derive(Clone)]
pub struct Database {
    pub catalog: Catalog,
    pub encounters: Arc<Encounters>,
    pub translations: Arc<Translations>,
}

impl Database {
    /// Loads the catalog, the encounter table and the translations
    /// concurrently.
    ///
    /// Fails as a whole if any of them cannot be read or parsed.
    pub fn load(config: &Config) -> impl Future<Output = Result<Self, Error>> + use<> {
        let catalog = config.catalog_path();
        let encounters = config.encounters_path();
        let translations = config.translations_path();

        async move {
            let (catalog, encounters, translations) = tokio::try_join!(
                read_json::<Catalog>(catalog),
                read_json::<Encounters>(encounters),
                read_json::<Translations>(translations),
            )?;

            log::info!(
                "Loaded database with {} Pokémon in {} series ({} encounter records, {} translations)",
                catalog.pokemon.len(),
                catalog.games.len(),
                encounters.len(),
                translations.len(),
            );

            Ok(Self {
                catalog,
                encounters: Arc::new(encounters),
                translations: Arc::new(translations),
            })
        }
    }

    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key)
    }

    pub fn groups(&self, selection: &Selection) -> Vec<&Series> {
        selection.groups(&self.catalog)
    }

    pub fn visible<'a>(
        &'a self,
        selection: &Selection,
        groups: &[&'a Series],
    ) -> Vec<search::Entry<'a>> {
        search::visible(&self.catalog, &self.encounters, groups, selection.query())
    }

    pub fn detail<'a>(&'a self, selection: &Selection, groups: &[&'a Series]) -> Option<Detail<'a>> {
        detail::Detail::selected(&self.catalog, &self.encounters, selection, groups)
    }

    pub fn color_of(&self, series: &Series, fallback: usize) -> Color {
        self.catalog.color_of(&series.id, fallback)
    }
}

async fn read_json<T>(path: PathBuf) -> Result<T, Error>
where
    T: DeserializeOwned + Send + 'static,
{
    use tokio::fs;
    use tokio::task;

    let contents = match fs::read(&path).await {
        Ok(contents) => contents,
        Err(error) => {
            return Err(Error::ReadFailed {
                path,
                error: Arc::new(error),
            });
        }
    };

    task::spawn_blocking(move || {
        serde_json::from_slice(&contents).map_err(|error| Error::ParseFailed {
            path,
            error: Arc::new(error),
        })
    })
    .await?
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("catalog", &self.catalog)
            .field("encounters", &self.encounters.len())
            .field("translations", &self.translations.len())
            .finish()
    }
}
