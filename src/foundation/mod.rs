//! Shared error taxonomy and millisecond helpers.

pub(crate) mod core;
pub(crate) mod error;
