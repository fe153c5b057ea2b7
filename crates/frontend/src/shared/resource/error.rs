use contracts::shared::form::FieldError;
use thiserror::Error;

/// Failure of a resource operation, caught at the controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// Missing identifier or non-2xx on a read
    #[error("{0}")]
    NotFound(String),

    /// 401 from the backend; the session listener has already been notified
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// Rejected write, or local validation before the write
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Delete(String),

    /// The collection could not be read
    #[error("{0}")]
    LoadFailed(String),

    /// Request never completed or the response could not be decoded
    #[error("Network error: {0}")]
    Network(String),

    /// The backend offers no such operation for this record in its current state
    #[error("{0}")]
    NotAllowed(String),

    /// The record is in a terminal state and cannot be edited
    #[error("This record is locked and can no longer be edited")]
    Locked,
}

impl ResourceError {
    /// Session expiry swaps the whole console for the login screen, so it is
    /// never rendered as an inline error.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ResourceError::SessionExpired)
    }
}

impl From<FieldError> for ResourceError {
    fn from(err: FieldError) -> Self {
        ResourceError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_becomes_validation() {
        let err: ResourceError = FieldError::required("name", "Name").into();
        assert_eq!(err, ResourceError::Validation("Name is required".to_string()));
        assert!(err.is_user_visible());
        assert!(!ResourceError::SessionExpired.is_user_visible());
    }
}
