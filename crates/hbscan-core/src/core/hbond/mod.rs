//! # Hydrogen-Bond Module
//!
//! Detects hydrogen bonds between pairs of residues with the geometric criteria
//! of Baker & Hubbard (1984).
//!
//! ## Overview
//!
//! Donors, hydrogens, acceptors and acceptor antecedents are located by atom
//! name and record order alone, so the structure must already carry explicit
//! hydrogens. Each candidate tuple is judged by [`HBondCriteria`], which degrades
//! gracefully when the hydrogen or antecedent cannot be placed.
//!
//! ## Key Components
//!
//! - [`roles`] - [`RoleFlags`], the backbone/sidechain facets of a search or result
//! - [`finders`] - Backbone donor and acceptor lookup
//! - [`scanners`] - Resumable sidechain donor and acceptor iterators
//! - [`criteria`] - The geometric validity test
//! - [`classify`] - [`HBondDetector`], which combines the above for a residue pair
//!
//! ## Usage
//!
//! ```
//! use hbscan::core::hbond::{RoleFlags, is_hydrogen_bonded};
//! use hbscan::core::models::{atom::Atom, system::MolecularSystem};
//! use nalgebra::Point3;
//!
//! let mut system = MolecularSystem::new();
//! let chain = system.add_chain('A');
//! let donor = system.add_residue(chain, 1, ' ', "ALA").unwrap();
//! let acceptor = system.add_residue(chain, 2, ' ', "GLY").unwrap();
//! for (name, x) in [("N", 0.0), ("H", 1.0)] {
//!     let atom = Atom::new(name, donor, Point3::new(x, 0.0, 0.0));
//!     system.add_atom_to_residue(donor, atom).unwrap();
//! }
//! for (name, x) in [("C", 4.2), ("O", 3.0)] {
//!     let atom = Atom::new(name, acceptor, Point3::new(x, 0.0, 0.0));
//!     system.add_atom_to_residue(acceptor, atom).unwrap();
//! }
//!
//! assert_eq!(
//!     is_hydrogen_bonded(&system, donor, acceptor, RoleFlags::ANY),
//!     Some(RoleFlags::BB)
//! );
//! ```

pub mod classify;
pub mod criteria;
pub mod finders;
pub mod roles;
pub mod scanners;

pub use classify::{HBond, HBondDetector};
pub use criteria::{CriteriaError, HBondCriteria, is_valid_hbond};
pub use roles::{ParseRoleFlagsError, RoleFlags};

use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;

/// Returns the role combination of the first hydrogen bond found between two
/// residues under the default criteria, or `None`.
pub fn is_hydrogen_bonded(
    system: &MolecularSystem,
    first: ResidueId,
    second: ResidueId,
    roles: RoleFlags,
) -> Option<RoleFlags> {
    HBondDetector::new(system)
        .classify(first, second, roles)
        .map(|bond| bond.roles)
}

/// Like [`is_hydrogen_bonded`], with `first` restricted to donating through its
/// backbone amide.
pub fn is_mainchain_donor_hbonded(
    system: &MolecularSystem,
    first: ResidueId,
    second: ResidueId,
    roles: RoleFlags,
) -> Option<RoleFlags> {
    HBondDetector::new(system)
        .classify_mainchain_donor(first, second, roles)
        .map(|bond| bond.roles)
}

/// Like [`is_hydrogen_bonded`], with `first` restricted to accepting through its
/// backbone carbonyl.
pub fn is_mainchain_acceptor_hbonded(
    system: &MolecularSystem,
    first: ResidueId,
    second: ResidueId,
    roles: RoleFlags,
) -> Option<RoleFlags> {
    HBondDetector::new(system)
        .classify_mainchain_acceptor(first, second, roles)
        .map(|bond| bond.roles)
}
