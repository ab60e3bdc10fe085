//! Configuration validation
//!
//! Everything a caller hands in is checked here, before any parsing starts.

use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Characters that would break the `Database["<schema>"]` reference path
const FORBIDDEN_SCHEMA_CHARS: &[char] = &['"', '\'', '`', '[', ']', '\\'];

/// Validate a schema name
///
/// Must be non-empty, without surrounding whitespace, and free of quoting
/// or bracket characters.
pub fn validate_schema_name(schema: &str) -> ConfigResult<()> {
    if schema.is_empty() {
        return Err(ConfigError::validation("schema name must not be empty"));
    }
    if schema.trim() != schema {
        return Err(ConfigError::validation(format!(
            "schema name {:?} has leading or trailing whitespace",
            schema
        )));
    }
    if let Some(c) = schema.chars().find(|c| FORBIDDEN_SCHEMA_CHARS.contains(c)) {
        return Err(ConfigError::validation(format!(
            "schema name {:?} contains forbidden character {:?}",
            schema, c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_schema_names() {
        assert!(validate_schema_name("public").is_ok());
        assert!(validate_schema_name("graphql_public").is_ok());
        assert!(validate_schema_name("my schema").is_ok());
    }

    #[test]
    fn test_invalid_schema_names() {
        assert!(validate_schema_name("").is_err());
        assert!(validate_schema_name(" public").is_err());
        assert!(validate_schema_name("pub\"lic").is_err());
        assert!(validate_schema_name("a]b").is_err());
    }
}
