//! Process-level configuration.

pub(crate) mod planner;
