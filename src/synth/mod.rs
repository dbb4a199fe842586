//! Deterministic fallback synthesis.

pub(crate) mod heuristic;
pub(crate) mod profile;
