//! Configuration I/O (YAML loading)
//!
//! ```yaml
//! version: 1
//! schema: public
//! operations:
//!   inserts: true
//!   updates: true
//! naming:
//!   enums: { template: "{name}", case: pascal }
//!   tables: { template: "{name}{operation}", case: pascal }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::transform_config::{OperationFlags, TransformConfig};
use super::validation::Validatable;
use crate::features::formatting::{NamingTemplate, TemplateAxis};

/// Supported configuration file versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub operations: OperationFlags,

    #[serde(default)]
    pub naming: NamingConfig,
}

/// Naming templates, one per formatter axis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enums: Option<NamingTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_types: Option<NamingTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<NamingTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<NamingTemplate>,
}

impl Validatable for NamingConfig {
    fn validate(&self) -> ConfigResult<()> {
        let entries = [
            (&self.enums, TemplateAxis::Enum),
            (&self.composite_types, TemplateAxis::CompositeType),
            (&self.tables, TemplateAxis::Table),
            (&self.functions, TemplateAxis::Function),
        ];
        for (template, axis) in entries {
            if let Some(template) = template {
                template.validate(axis)?;
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "NamingConfig"
    }
}

impl ConfigFileV1 {
    /// Check version and templates, then turn into a builder
    pub fn into_transform_config(self) -> ConfigResult<TransformConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.naming.validate()?;

        let mut config = TransformConfig::new().operations(self.operations);
        if let Some(schema) = self.schema {
            config = config.schema(schema);
        }

        let naming = self.naming;
        if let Some(t) = naming.enums {
            config = config.enum_formatter_arc(t.compile_name(TemplateAxis::Enum)?);
        }
        if let Some(t) = naming.composite_types {
            config = config.composite_formatter_arc(t.compile_name(TemplateAxis::CompositeType)?);
        }
        if let Some(t) = naming.tables {
            config = config.table_formatter_arc(t.compile_pair(TemplateAxis::Table)?);
        }
        if let Some(t) = naming.functions {
            config = config.function_formatter_arc(t.compile_pair(TemplateAxis::Function)?);
        }
        Ok(config)
    }
}

impl TransformConfig {
    /// Load a builder from YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<TransformConfig> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;
        file.into_transform_config()
    }

    /// Load a builder from a YAML file (v1 schema)
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<TransformConfig> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration file");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
