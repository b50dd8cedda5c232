use crate::Locale;

use std::env;
use std::path::PathBuf;

/// Where the datasets live and which translations to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: PathBuf,
    pub locale: Locale,
}

impl Config {
    pub const DATA_VAR: &'static str = "POKEDEX_DATA";
    pub const LOCALE_VAR: &'static str = "POKEDEX_LOCALE";

    pub fn from_env() -> Self {
        let default = Self::default();

        let config = Self {
            data: env::var_os(Self::DATA_VAR)
                .map(PathBuf::from)
                .unwrap_or(default.data),
            locale: env::var(Self::LOCALE_VAR)
                .ok()
                .filter(|locale| !locale.is_empty())
                .map(Locale::new)
                .unwrap_or(default.locale),
        };

        log::info!(
            "Using data from {} ({locale})",
            config.data.display(),
            locale = config.locale
        );

        config
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data.join("generated").join("pokedex.json")
    }

    pub fn encounters_path(&self) -> PathBuf {
        self.data.join("generated").join("encounters.json")
    }

    pub fn translations_path(&self) -> PathBuf {
        self.data
            .join("i18n")
            .join(format!("{locale}.json", locale = self.locale))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            locale: Locale::default(),
        }
    }
}
