use thiserror::Error;

/// Errors that can occur when validating a user payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("name and email are required")]
    MissingFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_display() {
        assert_eq!(
            UserError::MissingFields.to_string(),
            "name and email are required"
        );
    }
}
