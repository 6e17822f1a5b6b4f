/// Reasons a registry operation is rejected.
///
/// Every error leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("conflict: {reason}")]
    Conflict { reason: String },

    #[error("not found: {reason}")]
    NotFound { reason: String },

    #[error("credential id space exhausted")]
    IdSpaceExhausted,
}

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    Conflict,
    NotFound,
    IdSpaceExhausted,
}

impl RegistryError {
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IdSpaceExhausted => ErrorKind::IdSpaceExhausted,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
