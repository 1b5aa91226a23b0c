use crate::{
    error::Error,
    finder::{color_scheme::ColorScheme, keymap::KeyBinding},
    utils::any::Any,
};
use serde::Deserialize;
use serde_yaml::Value as YamlValue;
use std::{path::Path, time::Duration};
use url::Url;

#[derive(Clone, Debug, Deserialize)]
pub struct CatalogConfig {
    pub search_url: Url,
    pub covers_url: Url,

    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub occupation: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub debounce_ms: u64,
    pub profile: Profile,
    pub color_scheme: ColorScheme,
    pub keymap: Vec<KeyBinding>,
}

impl Config {
    const DEFAULT_CONFIG_STR: &'static str = std::include_str!("config.yaml");

    pub fn load(config_filepath: Option<&Path>) -> Result<Self, Error> {
        let mut value = Self::DEFAULT_CONFIG_STR.deserialize_from_yaml::<YamlValue>()?;

        if let Some(config_filepath) = config_filepath {
            let overlay = config_filepath.read_to_string()?.deserialize_from_yaml::<YamlValue>()?;

            Self::merge(&mut value, overlay);
        }

        serde_yaml::from_value::<Self>(value)?.ok()
    }

    // NOTE: mappings merge key by key; anything else (including sequences like the keymap) is replaced outright
    fn merge(base: &mut YamlValue, overlay: YamlValue) {
        match (base, overlay) {
            (YamlValue::Mapping(base), YamlValue::Mapping(overlay)) => {
                for (key, overlay_value) in overlay {
                    if let Some(base_value) = base.get_mut(&key) {
                        Self::merge(base_value, overlay_value);
                    } else {
                        base.insert(key, overlay_value);
                    }
                }
            }
            (base, YamlValue::Null) => tracing::debug!(ignored_null_over = ?base),
            (base, overlay) => *base = overlay,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
