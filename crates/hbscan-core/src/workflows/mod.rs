//! # Workflows Module
//!
//! High-level entry points that tie the engine and core layers together.
//!
//! - **Scan Workflow** ([`scan`]) - Find every hydrogen bond among the selected
//!   residues of a structure, or classify a single residue pair.

pub mod scan;
