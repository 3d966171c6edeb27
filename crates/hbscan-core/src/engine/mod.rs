//! # Engine Module
//!
//! This module runs the hydrogen-bond classifier over whole structures.
//!
//! ## Overview
//!
//! The classifier in [`crate::core::hbond`] answers a question about one residue
//! pair. The engine turns a [`config::ScanConfig`] into the set of pairs worth
//! asking about, runs the classifier over them (in parallel with the `parallel`
//! feature) and reports progress along the way.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scan mode, role flags, criteria and residue selection
//! - **Selection** ([`selection`]) - Turning zones and residue specifiers into residue IDs
//! - **Progress Monitoring** ([`progress`]) - Progress reporting and user feedback mechanisms
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Tasks** ([`tasks`]) - The pairwise scan itself

pub mod config;
pub mod error;
pub mod progress;
pub mod selection;
pub mod tasks;
