/// Convenience result type used across rigplan.
pub type RigResult<T> = Result<T, RigError>;

/// Top-level error taxonomy used by planner APIs.
#[derive(thiserror::Error, Debug)]
pub enum RigError {
    /// Malformed request input (missing or non-array `words` / `visemes`, bad fps).
    #[error("validation error: {0}")]
    Validation(String),

    /// Problems reading a parameter catalog from disk or another source.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Failures of the generative collaborator (transport, status, empty reply).
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigError {
    /// Build a [`RigError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RigError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`RigError::Collaborator`] value.
    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    /// Build a [`RigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors that must be reported back to the caller as a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for RigError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
