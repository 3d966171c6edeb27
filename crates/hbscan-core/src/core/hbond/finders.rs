use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;
use crate::core::utils::identifiers::{
    is_backbone_carbonyl_carbon, is_backbone_hydrogen, is_backbone_nitrogen, is_backbone_oxygen,
    is_proline,
};

/// Backbone amide nitrogen of a residue and its hydrogen, if modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackboneDonor {
    pub donor: AtomId,
    pub hydrogen: Option<AtomId>,
}

/// Backbone carbonyl (or terminal carboxyl) oxygen and its carbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackboneAcceptor {
    pub acceptor: AtomId,
    pub antecedent: AtomId,
}

/// Locates the backbone donor of a residue.
///
/// Proline has no amide hydrogen and never donates. When a name occurs more than
/// once, the last occurrence wins.
pub fn find_backbone_donor(system: &MolecularSystem, residue_id: ResidueId) -> Option<BackboneDonor> {
    let residue = system.residue(residue_id)?;
    if is_proline(&residue.name) {
        return None;
    }

    let mut donor = None;
    let mut hydrogen = None;
    for (atom_id, atom) in system.residue_atoms(residue_id) {
        if is_backbone_nitrogen(&atom.name) {
            donor = Some(atom_id);
        } else if is_backbone_hydrogen(&atom.name) {
            hydrogen = Some(atom_id);
        }
    }

    donor.map(|donor| BackboneDonor { donor, hydrogen })
}

/// Locates the backbone acceptor of a residue.
///
/// Both the oxygen and the carbonyl carbon must be present. When a name occurs
/// more than once, the last occurrence wins.
pub fn find_backbone_acceptor(
    system: &MolecularSystem,
    residue_id: ResidueId,
) -> Option<BackboneAcceptor> {
    let mut acceptor = None;
    let mut antecedent = None;
    for (atom_id, atom) in system.residue_atoms(residue_id) {
        if is_backbone_oxygen(&atom.name) {
            acceptor = Some(atom_id);
        } else if is_backbone_carbonyl_carbon(&atom.name) {
            antecedent = Some(atom_id);
        }
    }

    Some(BackboneAcceptor {
        acceptor: acceptor?,
        antecedent: antecedent?,
    })
}
