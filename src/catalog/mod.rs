//! Parameter catalog parsing and glossary rendering.

pub(crate) mod definition;
pub(crate) mod glossary;
pub(crate) mod parse;
