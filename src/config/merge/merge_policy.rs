//! Base builder carrying compiled-in defaults at the lowest precedence.

use crate::config::StitchConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder seeded with `StitchConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&StitchConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
