//! # Core Module
//!
//! The building blocks of hydrogen-bond detection.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains and the system store
//! - **Hydrogen Bonds** ([`hbond`]) - Donor/acceptor location, the validity test and pair classification
//! - **File I/O** ([`io`]) - Reading PDB files into the store
//! - **Utilities** ([`utils`]) - Geometry, atom-name predicates and residue zones
//!
//! ## Scientific Foundation
//!
//! Donors, acceptors and their neighbours are identified from atom names and
//! record order, following the conventions of PDB files with explicit hydrogens.
//! A candidate bond is accepted when its distances and angles satisfy the
//! criteria of Baker & Hubbard, Prog. Biophys. Mol. Biol. 44, 97-179 (1984).

pub mod hbond;
pub mod io;
pub mod models;
pub mod utils;
