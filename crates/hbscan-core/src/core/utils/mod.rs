//! Small helpers shared by the hydrogen-bond engine and its callers.

pub mod geometry;
pub mod identifiers;
pub mod zone;
