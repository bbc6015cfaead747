// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SimdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::SimdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.simulation, raw.graph))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_simulation(cfg)?;
    Ok(())
}

fn validate_simulation(cfg: &RawConfigFile) -> Result<()> {
    // on_cycle is strongly typed and validated during deserialization, so we
    // don't need to check it here.

    if cfg.simulation.workers == 0 {
        return Err(SimdagError::ConfigError(
            "[simulation].workers must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.simulation.stall_bound == 0 {
        return Err(SimdagError::ConfigError(
            "[simulation].stall_bound must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
