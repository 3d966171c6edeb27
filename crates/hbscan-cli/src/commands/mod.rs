pub mod pair;
pub mod scan;

use crate::error::{CliError, Result};
use hbscan::core::io::pdb::{PdbFile, PdbMetadata};
use hbscan::core::io::traits::MolecularFile;
use hbscan::core::models::system::MolecularSystem;
use std::path::Path;
use tracing::{info, warn};

/// Reads the structure file shared by every command.
pub(crate) fn load_structure(path: &Path) -> Result<(MolecularSystem, PdbMetadata)> {
    info!("Loading input structure from {:?}", path);
    let (system, metadata) =
        PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

    if metadata.skipped_alternate_locations > 0 {
        warn!(
            "Ignored {} atom record(s) with alternate locations other than 'A'.",
            metadata.skipped_alternate_locations
        );
    }
    if metadata.has_additional_models {
        warn!("Input has several models; only the first one is scanned.");
    }
    info!(
        atoms = system.atoms_iter().count(),
        residues = system.residues_iter().count(),
        "Structure loaded."
    );
    Ok((system, metadata))
}
