use thiserror::Error;

/// Errors that can occur when building an item from a request payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("request body must be a JSON object")]
    NotAnObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(
            ItemError::NotAnObject.to_string(),
            "request body must be a JSON object"
        );
    }
}
