//! Provides input functionality for molecular file formats.
//!
//! Readers implement the [`traits::MolecularFile`] trait and build a
//! [`MolecularSystem`](crate::core::models::system::MolecularSystem) that keeps
//! the record order and column-aligned atom names of the source file.

pub mod pdb;
pub mod traits;
