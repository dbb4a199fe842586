//! Speech timing inputs.

pub(crate) mod timing;
