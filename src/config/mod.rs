mod basic;

pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "QUESTBOARD_";

impl Config {
    /// Builds a Figment that merges defaults, the TOML file at `path` (if present)
    /// and `QUESTBOARD_`-prefixed environment variables, in that order.
    ///
    /// Nested keys use `__` in the environment, e.g. `QUESTBOARD_BASIC__LISTEN_PORT=9000`.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        let path = path.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if path.is_file() {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn figment() -> Figment {
        Self::figment_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration by merging defaults, `config.toml` if present, and the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
