pub mod error;
pub mod extract;
pub mod health;
pub mod items;
pub mod users;

pub use error::ApiError;
pub use extract::JsonPayload;
