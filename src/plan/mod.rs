//! Plan orchestration and the generative collaborator seam.

pub(crate) mod generator;
pub(crate) mod hints;
pub(crate) mod openai;
pub(crate) mod orchestrator;
pub(crate) mod prompt;
pub(crate) mod request;
