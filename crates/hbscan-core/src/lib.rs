//! # hbscan Core Library
//!
//! Detection of hydrogen bonds between residues of a molecular structure, using
//! the geometric criteria of Baker & Hubbard (1984).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** The atom store (`MolecularSystem`), geometry and
//!   atom-name helpers, the PDB reader, and the hydrogen-bond classifier itself.
//!   Classification only borrows the store and keeps no global state.
//!
//! - **[`engine`]: The Logic Core.** Scan configuration, residue selection, progress
//!   reporting and the pairwise scan task.
//!
//! - **[`workflows`]: The Public API.** Complete procedures, such as scanning a
//!   structure for every hydrogen bond, with validation and progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
