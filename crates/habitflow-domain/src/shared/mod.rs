use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(HabitId);
define_id!(CompletionId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    HabitNotFound = 2001,
    CompletionNotFound = 2002,

    // Business Logic (3xxx)
    InvalidCadence = 3001,
    HabitInactive = 3002,
    DuplicateHabit = 3003,
    CompletionInFuture = 3004,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4002,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::HabitNotFound
            | ErrorCode::CompletionNotFound
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::InvalidCadence
            | ErrorCode::HabitInactive
            | ErrorCode::DuplicateHabit
            | ErrorCode::CompletionInFuture => ErrorSeverity::Warning,

            ErrorCode::RepositoryError | ErrorCode::DataIntegrityError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::HabitInactive | ErrorCode::CompletionInFuture | ErrorCode::RepositoryError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid cadence: {0}")]
    InvalidCadence(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Completion not found: {0}")]
    CompletionNotFound(String),

    #[error("Habit already exists: {0}")]
    DuplicateHabit(String),

    #[error("Habit is inactive: {0}")]
    HabitInactive(String),

    #[error("Completion is in the future: {0}")]
    CompletionInFuture(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCadence(_) => ErrorCode::InvalidCadence,
            DomainError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            DomainError::CompletionNotFound(_) => ErrorCode::CompletionNotFound,
            DomainError::DuplicateHabit(_) => ErrorCode::DuplicateHabit,
            DomainError::HabitInactive(_) => ErrorCode::HabitInactive,
            DomainError::CompletionInFuture(_) => ErrorCode::CompletionInFuture,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidCadence(msg)
            | DomainError::HabitNotFound(msg)
            | DomainError::CompletionNotFound(msg)
            | DomainError::DuplicateHabit(msg)
            | DomainError::HabitInactive(msg)
            | DomainError::CompletionInFuture(msg)
            | DomainError::Repository(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
