//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod pressure;
pub mod roof;
pub mod velocity;
pub mod wall;

use tracing::warn;
use xwind_asce722::pressure::DomainClamp;

use crate::config::CliConfig;
use crate::output::Output;

/// Settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub output: Output,
    pub warn_on_clamp: bool,
}

impl Context {
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            output: Output::from_config(config),
            warn_on_clamp: config.warn_on_clamp,
        }
    }

    /// Log a warning for each axis that was clamped into a table domain
    pub fn warn_clamps(&self, clamps: impl Iterator<Item = DomainClamp>) {
        if !self.warn_on_clamp {
            return;
        }
        for clamp in clamps {
            warn!(
                table = clamp.table,
                axis = clamp.axis,
                "{} = {} is outside the {} table; using {}",
                clamp.axis,
                clamp.value,
                clamp.table,
                clamp.clamped_to
            );
        }
    }
}
