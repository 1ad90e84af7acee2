//! Contract error types for the seed service
//!
//! These errors are transport-agnostic; repository failures are folded
//! into `Storage` with their message preserved.

/// Seed service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Underlying storage operation failed
    Storage {
        /// Error message from the storage layer
        message: String,
    },
    /// A role grant references a permission that was never registered
    MissingPermission {
        /// Permission name
        name: String,
    },
}

impl SeedError {
    /// Fold a repository error into the storage variant.
    pub fn storage(err: anyhow::Error) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { message } => {
                write!(f, "Storage error: {}", message)
            }
            Self::MissingPermission { name } => {
                write!(f, "Permission not registered: {}", name)
            }
        }
    }
}

impl std::error::Error for SeedError {}
