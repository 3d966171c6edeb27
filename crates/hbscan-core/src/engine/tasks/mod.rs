//! Computational units run by the workflows.
//!
//! Each task performs one pass over the structure, reports its progress through
//! the shared [`ProgressReporter`](crate::engine::progress::ProgressReporter) and
//! returns plain data for the workflow to assemble.

pub mod hbond_scan;
