//! Configuration
//!
//! - [`TransformConfig`]: builder for library callers, closures as formatters
//! - [`ConfigFileV1`]: `schemaflat.yaml`, templates as formatters
//! - [`ValidatedConfig`]: the resolved, immutable form the pipeline consumes

pub mod error;
pub mod io;
pub mod transform_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, NamingConfig, SUPPORTED_VERSIONS};
pub use transform_config::{OperationFlags, TransformConfig, ValidatedConfig, DEFAULT_SCHEMA};
pub use validation::{validate_schema_name, Validatable};
