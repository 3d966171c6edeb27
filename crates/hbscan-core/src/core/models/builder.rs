use super::atom::Atom;
use super::ids::{AtomId, ChainId, ResidueId};
use super::system::MolecularSystem;
use nalgebra::Point3;

/// Incrementally assembles a [`MolecularSystem`] from a stream of atom records.
///
/// Readers announce chains and residues as they appear and then add atoms to the
/// current residue. Re-announcing an existing chain or residue continues it
/// rather than creating a duplicate.
#[derive(Debug, Default)]
pub struct MolecularSystemBuilder {
    system: MolecularSystem,

    // --- Builder-specific state for streaming construction ---
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl MolecularSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_chain(&mut self, id: char) -> &mut Self {
        self.current_chain = Some(self.system.add_chain(id));
        self.current_residue = None;
        self
    }

    /// Starts (or resumes) a residue in the current chain.
    ///
    /// Does nothing when no chain has been started.
    pub fn start_residue(
        &mut self,
        residue_number: isize,
        insertion_code: char,
        name: &str,
    ) -> &mut Self {
        self.current_residue = self.current_chain.and_then(|chain_id| {
            self.system
                .add_residue(chain_id, residue_number, insertion_code, name)
        });
        self
    }

    /// Adds an atom to the current residue.
    ///
    /// # Return
    ///
    /// Returns `None` if no residue has been started.
    pub fn add_atom(
        &mut self,
        serial: usize,
        raw_name: &str,
        position: Point3<f64>,
    ) -> Option<AtomId> {
        let residue_id = self.current_residue?;
        let atom = Atom::from_raw_name(raw_name, residue_id, position).with_serial(serial);
        self.system.add_atom_to_residue(residue_id, atom)
    }

    pub fn atom_count(&self) -> usize {
        self.system.atom_count()
    }

    pub fn build(self) -> MolecularSystem {
        self.system
    }
}
