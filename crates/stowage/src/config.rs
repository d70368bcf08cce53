use std::env;

/// Region used when neither the environment nor the AWS profile provide one.
#[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
pub const DEFAULT_AWS_REGION: &str = "ap-southeast-1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding items. Item routes fail when unset.
    pub items_table_name: Option<String>,
    /// AWS region override for the DynamoDB client.
    pub aws_region: Option<String>,
    /// Custom DynamoDB endpoint (e.g. DynamoDB Local).
    pub dynamodb_endpoint_url: Option<String>,
    /// PostgreSQL connection URL. When unset, libpq `PG*` variables are used.
    pub database_url: Option<String>,
    /// Maximum number of pooled PostgreSQL connections (default: 10)
    pub database_max_connections: u32,
    /// Create the `users` table at startup when missing (default: false)
    pub database_auto_migrate: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITEMS_TABLE_NAME` - DynamoDB items table (no default)
    /// - `AWS_REGION` - DynamoDB region (default: provider chain, then "ap-southeast-1")
    /// - `DYNAMODB_ENDPOINT_URL` - DynamoDB endpoint override
    /// - `DATABASE_URL` - PostgreSQL URL (default: libpq environment)
    /// - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
    /// - `DATABASE_AUTO_MIGRATE` - Create the users table on startup (default: false)
    pub fn from_env() -> Self {
        Self {
            items_table_name: non_empty_var("ITEMS_TABLE_NAME"),
            aws_region: non_empty_var("AWS_REGION"),
            dynamodb_endpoint_url: non_empty_var("DYNAMODB_ENDPOINT_URL"),
            database_url: non_empty_var("DATABASE_URL"),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            database_auto_migrate: env::var("DATABASE_AUTO_MIGRATE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Log a warning for every missing setting that will make routes fail.
    ///
    /// Startup continues regardless; affected routes return errors instead.
    pub fn warn_missing(&self) {
        if self.items_table_name.is_none() {
            tracing::warn!("ITEMS_TABLE_NAME is not set, /items routes will fail");
        }
        if self.database_url.is_none() {
            tracing::warn!("DATABASE_URL is not set, falling back to PG* environment variables");
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("ITEMS_TABLE_NAME");
        env::remove_var("AWS_REGION");
        env::remove_var("DYNAMODB_ENDPOINT_URL");
        env::remove_var("DATABASE_URL");
        env::remove_var("DATABASE_MAX_CONNECTIONS");
        env::remove_var("DATABASE_AUTO_MIGRATE");

        let config = Config::from_env();

        assert_eq!(config.items_table_name, None);
        assert_eq!(config.aws_region, None);
        assert_eq!(config.dynamodb_endpoint_url, None);
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 10);
        assert!(!config.database_auto_migrate);
    }
}
