use crate::schema::prelude::*;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
}

///
/// Config
/// Allow-list gating for the annotator. A module must be named in
/// `enabled_modules` before any of its classes is touched; individual classes
/// can be excluded on top of that.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub enabled_modules: Vec<String>,

    #[serde(default)]
    pub skip_classes: Vec<String>,
}

impl Config {
    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Allow-list a set of modules directly, mainly for tests and tooling.
    #[must_use]
    pub fn with_enabled_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled_modules: modules.into_iter().map(Into::into).collect(),
            skip_classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_module_enabled(&self, module: &str) -> bool {
        self.enabled_modules.iter().any(|m| m == module)
    }

    #[must_use]
    pub fn is_class_enabled(&self, class: &Class) -> bool {
        self.is_module_enabled(&class.module) && !self.skip_classes.iter().any(|c| c == &class.name)
    }
}
