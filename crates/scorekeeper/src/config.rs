//! Sport catalog configuration.
//!
//! The catalog lists the sports offered on the menu. It is read from a TOML
//! file of `[[sport]]` tables; without a file the built-in football, tennis
//! and golf presets are used.

use derive_getters::Getters;
use derive_more::{Display, Error};
use scorekeeper_rules::{RuleSet, SportPreset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Menu keys the menu itself uses.
pub const RESERVED_KEYS: [char; 2] = ['h', 'q'];

/// The sports a scorer can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SportCatalog {
    /// Presets in menu order.
    #[serde(rename = "sport", default)]
    sports: Vec<SportPreset>,
}

impl Default for SportCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SportCatalog {
    /// The built-in catalog: football, tennis, golf.
    #[instrument]
    pub fn builtin() -> Self {
        Self {
            sports: SportPreset::builtin(),
        }
    }

    /// Creates a catalog from presets, validating them.
    #[instrument(skip(sports), fields(count = sports.len()))]
    pub fn new(sports: Vec<SportPreset>) -> Result<Self, ConfigError> {
        let catalog = Self { sports };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let catalog: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse sport catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading sport catalog from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read sport catalog: {}", e))
        })?;
        let catalog = Self::from_toml(&content)?;
        info!(sports = catalog.sports.len(), "Sport catalog loaded");
        Ok(catalog)
    }

    /// Loads the catalog named on the command line, if any.
    ///
    /// A path that does not exist falls back to the built-in catalog.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                warn!(
                    "Sport catalog not found at {}, using built-in sports",
                    path.display()
                );
                Ok(Self::builtin())
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Serializes the catalog as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize sport catalog: {}", e)))
    }

    /// Checks every preset and the menu keys.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sports.is_empty() {
            return Err(ConfigError::new("Sport catalog is empty".to_string()));
        }

        let mut keys = HashSet::new();
        for preset in &self.sports {
            let name = preset.name();
            let key = preset.key().to_ascii_lowercase();
            if *preset.intervals() == 0 {
                return Err(ConfigError::new(format!("{} has no intervals", name)));
            }
            if *preset.min_players() == 0 {
                return Err(ConfigError::new(format!("{} allows zero players", name)));
            }
            if preset.min_players() > preset.max_players() {
                return Err(ConfigError::new(format!(
                    "{} has min_players {} above max_players {}",
                    name,
                    preset.min_players(),
                    preset.max_players()
                )));
            }
            if *preset.rules() == RuleSet::Tennis && *preset.min_players() < 2 {
                return Err(ConfigError::new(format!(
                    "{} uses tennis rules and needs at least 2 players",
                    name
                )));
            }
            if RESERVED_KEYS.contains(&key) {
                return Err(ConfigError::new(format!(
                    "{} uses reserved menu key '{}'",
                    name, key
                )));
            }
            if !keys.insert(key) {
                return Err(ConfigError::new(format!(
                    "{} reuses menu key '{}'",
                    name, key
                )));
            }
        }
        debug!(sports = self.sports.len(), "Sport catalog valid");
        Ok(())
    }

    /// Preset selected by a menu key, ignoring case.
    pub fn by_key(&self, key: char) -> Option<&SportPreset> {
        let key = key.to_ascii_lowercase();
        self.sports
            .iter()
            .find(|preset| preset.key().to_ascii_lowercase() == key)
    }

    /// Preset selected by name (ignoring case) or by menu key.
    pub fn find(&self, name: &str) -> Option<&SportPreset> {
        let name = name.trim();
        self.sports
            .iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .or_else(|| {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) => self.by_key(key),
                    _ => None,
                }
            })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
