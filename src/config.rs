//! Runtime settings
//!
//! There is no settings file; defaults can be overridden through `IFRATE_*`
//! environment variables, e.g. `IFRATE_MAX_DESCR_WIDTH=30`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;

/// Narrowest neighbor column that still fits a short "host-E1/1" entry
const MIN_NEIGH_WIDTH: usize = 13;
const MIN_DESCR_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Width of the `Descr` column
    pub max_descr_width: usize,
    /// Width of the `C/L-Neighbor` column
    pub max_neigh_width: usize,
    /// Program that runs one switch CLI command
    pub gateway_program: String,
    /// Arguments placed before the command text
    pub gateway_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_descr_width: 23,
            max_neigh_width: 30,
            gateway_program: "vsh".to_string(),
            gateway_args: vec!["-c".to_string()],
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment
    pub fn load() -> anyhow::Result<Self> {
        let environment = Environment::with_prefix("IFRATE")
            .try_parsing(true)
            .list_separator(" ")
            .with_list_parse_key("gateway_args");
        Self::from_builder(Config::builder().add_source(environment))
    }

    /// Applies defaults beneath the given sources, then validates
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let settings: Settings = builder
            .set_default("max_descr_width", defaults.max_descr_width as u64)?
            .set_default("max_neigh_width", defaults.max_neigh_width as u64)?
            .set_default("gateway_program", defaults.gateway_program)?
            .set_default("gateway_args", defaults.gateway_args)?
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.max_descr_width >= MIN_DESCR_WIDTH,
            "max_descr_width must be >= {MIN_DESCR_WIDTH}, got {}",
            self.max_descr_width
        );
        anyhow::ensure!(
            self.max_neigh_width >= MIN_NEIGH_WIDTH,
            "max_neigh_width must be >= {MIN_NEIGH_WIDTH}, got {}",
            self.max_neigh_width
        );
        anyhow::ensure!(
            !self.gateway_program.trim().is_empty(),
            "gateway_program must be non-empty"
        );
        Ok(())
    }
}
