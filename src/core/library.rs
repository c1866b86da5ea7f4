use std::fmt;
use std::fmt::{Display, Formatter};

// CirculationError covers faults raised by the storage collaborators around
// the decision engine. The engine itself never produces these; rule
// violations travel through core::results instead.
#[derive(Debug)]
pub enum CirculationError {
    Storage {
        message: String,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl CirculationError {
    pub fn storage(message: &str, retryable: bool) -> CirculationError {
        CirculationError::Storage { message: message.to_string(), retryable }
    }

    pub fn not_found(message: &str) -> CirculationError {
        CirculationError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> CirculationError {
        CirculationError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> CirculationError {
        CirculationError::Runtime { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CirculationError::Storage { retryable, .. } => *retryable,
            CirculationError::NotFound { .. } => false,
            CirculationError::Serialization { .. } => false,
            CirculationError::Runtime { .. } => false,
        }
    }
}

impl From<serde_json::Error> for CirculationError {
    fn from(err: serde_json::Error) -> Self {
        CirculationError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::Storage { message, retryable } => {
                write!(f, "{} {}", message, retryable)
            }
            CirculationError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for storage collaborators.
pub type CirculationIoResult<T> = Result<T, CirculationError>;

#[cfg(test)]
mod tests {
    use crate::core::library::CirculationError;

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(CirculationError::storage("test", false),
                         CirculationError::Storage { message: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CirculationError::not_found("test"),
                         CirculationError::NotFound { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(CirculationError::serialization("test"),
                         CirculationError::Serialization { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(CirculationError::runtime("test"),
                         CirculationError::Runtime { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, CirculationError::storage("test", false).retryable());
        assert_eq!(true, CirculationError::storage("test", true).retryable());
        assert_eq!(false, CirculationError::not_found("test").retryable());
        assert_eq!(false, CirculationError::serialization("test").retryable());
        assert_eq!(false, CirculationError::runtime("test").retryable());
    }
}
