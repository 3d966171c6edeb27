//! # Core Models Module
//!
//! This module contains the atom store consulted by the hydrogen-bond engine.
//!
//! ## Overview
//!
//! A structure is held as a [`system::MolecularSystem`]: slot-map storage of atoms,
//! residues and chains, with every group remembering the record order of the
//! source file. The hydrogen-bond heuristics depend on that order ("the atom
//! preceding a hydrogen is its donor"), so the store never reorders atoms.
//!
//! ## Key Components
//!
//! - [`atom`] - Atom records with normalized and column-aligned raw names
//! - [`residue`] - Residues keyed by number and insertion code
//! - [`chain`] - Chains and their residue order
//! - [`system`] - The store itself, including the next-residue walk
//! - [`builder`] - Streaming construction used by the file readers
//! - [`ids`] - Stable handles for atoms, residues and chains
//!
//! ## Usage
//!
//! ```
//! use hbscan::core::models::{atom::Atom, system::MolecularSystem};
//! use nalgebra::Point3;
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, ' ', "ALA").unwrap();
//!
//! let atom = Atom::new("CA", residue_id, Point3::new(0.0, 0.0, 0.0));
//! system.add_atom_to_residue(residue_id, atom).unwrap();
//! assert_eq!(system.residue_atoms(residue_id).count(), 1);
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
