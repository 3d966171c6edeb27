//! Stable handles into the [`MolecularSystem`](super::system::MolecularSystem) slot maps.
//!
//! Handles stay valid for as long as the item they name is stored, and a removed
//! item's handle never resolves again, so stale ids simply look up to `None`.

use slotmap::new_key_type;

new_key_type! {
    /// Handle of an [`Atom`](super::atom::Atom).
    pub struct AtomId;
    /// Handle of a [`Residue`](super::residue::Residue).
    pub struct ResidueId;
    /// Handle of a [`Chain`](super::chain::Chain).
    pub struct ChainId;
}
