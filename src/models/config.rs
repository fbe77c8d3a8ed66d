//! Configuration model loaded from external sources.

use serde::Deserialize;
use thiserror::Error;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Upper bound on `max_per_page` accepted from configuration.
pub const PER_PAGE_LIMIT: usize = 1000;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Page size policy applied to every table.
#[serde(default)]
pub struct TableSettings {
    pub default_per_page: usize,
    pub max_per_page: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_per_page: 100,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[cfg(feature = "cli")]
    #[error("Error loading settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("max_per_page must be between 1 and {limit}, got {value}")]
    MaxPerPageOutOfRange { value: usize, limit: usize },

    #[error("default_per_page must be between 1 and {max}, got {value}")]
    DefaultPerPageOutOfRange { value: usize, max: usize },
}

impl TableSettings {
    /// Checks `1 <= default_per_page <= max_per_page <= PER_PAGE_LIMIT`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_per_page == 0 || self.max_per_page > PER_PAGE_LIMIT {
            return Err(SettingsError::MaxPerPageOutOfRange {
                value: self.max_per_page,
                limit: PER_PAGE_LIMIT,
            });
        }
        if self.default_per_page == 0 || self.default_per_page > self.max_per_page {
            return Err(SettingsError::DefaultPerPageOutOfRange {
                value: self.default_per_page,
                max: self.max_per_page,
            });
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use loader::load_settings;

#[cfg(feature = "cli")]
mod loader {
    use std::path::Path;

    use config::Config;

    use super::{SettingsError, TableSettings};

    /// Layers `default.yaml`, `{app_env}.yaml` and `APP_*` environment
    /// variables found under `config_dir` on top of the built-in defaults.
    pub fn load_settings(config_dir: &Path, app_env: &str) -> Result<TableSettings, SettingsError> {
        let settings = Config::builder()
            .add_source(
                config::File::with_name(&config_dir.join("default").to_string_lossy())
                    .required(false),
            )
            .add_source(
                config::File::with_name(&config_dir.join(app_env).to_string_lossy())
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let table_settings = settings.try_deserialize::<TableSettings>()?;
        table_settings.validate()?;

        log::debug!("Loaded table settings: {table_settings:?}");

        Ok(table_settings)
    }
}
