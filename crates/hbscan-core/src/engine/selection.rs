use super::config::ResidueSelection;
use super::error::EngineError;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::zone::ResidueSpec;
use itertools::Itertools;
use tracing::debug;

/// Resolves a residue selection to residue IDs in structure order.
///
/// # Errors
///
/// Returns [`EngineError::EmptySelection`] when zones are given but no residue
/// of the system falls inside any of them.
pub fn resolve_selection(
    system: &MolecularSystem,
    selection: &ResidueSelection,
) -> Result<Vec<ResidueId>, EngineError> {
    let residues = system.residues_in_order();
    let zones = match selection {
        ResidueSelection::All => return Ok(residues),
        ResidueSelection::Zones(zones) => zones,
    };

    let selected: Vec<ResidueId> = residues
        .into_iter()
        .filter(|&residue_id| {
            let Some(residue) = system.residue(residue_id) else {
                return false;
            };
            let Some(chain) = system.chain(residue.chain_id) else {
                return false;
            };
            zones.iter().any(|zone| {
                zone.contains(chain.id, residue.residue_number, residue.insertion_code)
            })
        })
        .collect();

    debug!(
        zones = zones.len(),
        residues = selected.len(),
        "Resolved zone selection."
    );

    if selected.is_empty() {
        return Err(EngineError::EmptySelection {
            selection: zones.iter().join(", "),
        });
    }
    Ok(selected)
}

/// Looks up a single residue by chain, number and insertion code.
pub fn resolve_residue(
    system: &MolecularSystem,
    spec: &ResidueSpec,
) -> Result<ResidueId, EngineError> {
    system
        .find_chain_by_id(spec.chain)
        .and_then(|chain_id| {
            system.find_residue(chain_id, spec.residue_number, spec.insertion_code)
        })
        .ok_or(EngineError::ResidueNotFound { spec: *spec })
}
