use thiserror::Error;

use super::config::ConfigError;
use crate::core::utils::zone::ResidueSpec;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Residue not found in system: {spec}")]
    ResidueNotFound { spec: ResidueSpec },

    #[error("Residue selection matches no residues: {selection}")]
    EmptySelection { selection: String },
}
