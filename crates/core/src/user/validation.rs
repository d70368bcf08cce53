use serde_json::Value;

use super::error::UserError;
use super::types::NewUser;

/// Validates a `POST /users` payload.
///
/// Both `name` and `email` must be present, be strings and be non-empty.
/// Any other payload shape is rejected the same way.
pub fn validate_new_user(payload: &Value) -> Result<NewUser, UserError> {
    let name = required_string(payload, "name");
    let email = required_string(payload, "email");

    match (name, email) {
        (Some(name), Some(email)) => Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }),
        _ => Err(UserError::MissingFields),
    }
}

fn required_string<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
