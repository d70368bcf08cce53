mod error;
mod types;
mod validation;

pub use error::UserError;
pub use types::{NewUser, User};
pub use validation::validate_new_user;
