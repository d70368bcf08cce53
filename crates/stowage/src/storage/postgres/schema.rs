//! PostgreSQL schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Identifiers are cast to `BIGINT` so tables created
//! with `SERIAL` decode the same way as `BIGSERIAL`.

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)
"#;

/// List all users ordered by ascending id.
pub const SELECT_USERS: &str = "SELECT id::BIGINT AS id, name, email FROM users ORDER BY id";

/// Insert a user and return the stored row.
pub const INSERT_USER: &str =
    "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id::BIGINT AS id, name, email";
