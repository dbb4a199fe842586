//! Timeline model, untrusted candidate reading and range clamping.

pub(crate) mod candidate;
pub(crate) mod clamp;
pub(crate) mod model;
