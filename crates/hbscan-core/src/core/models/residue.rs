use super::ids::{AtomId, ChainId};
use std::fmt;

/// Insertion code used when a residue carries none.
pub const NO_INSERTION_CODE: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub residue_number: isize,     // Residue sequence number from source file
    pub insertion_code: char,      // PDB insertion code, ' ' when absent
    pub name: String,              // Name of the residue (e.g., "ALA", "LYS")
    pub chain_id: ChainId,         // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>, // Atoms in file order
}

impl Residue {
    pub(crate) fn new(
        residue_number: isize,
        insertion_code: char,
        name: &str,
        chain_id: ChainId,
    ) -> Self {
        Self {
            residue_number,
            insertion_code,
            name: name.trim().to_string(),
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    /// Atoms of this residue, in the order they were added.
    ///
    /// The hydrogen-bond scanners rely on this order: it is the record order of
    /// the source file, so "the atom before" means the preceding record.
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// The residue label without chain, e.g. `"45"` or `"45A"`.
    pub fn label(&self) -> ResidueLabel {
        ResidueLabel {
            residue_number: self.residue_number,
            insertion_code: self.insertion_code,
        }
    }
}

/// Display helper printing a residue number followed by its insertion code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueLabel {
    pub residue_number: isize,
    pub insertion_code: char,
}

impl fmt::Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.residue_number)?;
        if self.insertion_code != NO_INSERTION_CODE {
            write!(f, "{}", self.insertion_code)?;
        }
        Ok(())
    }
}
