/*
 * schemaflat - Flat type declarations from a generated `Database` type
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (EntityCategory, RawEntity, Span)
 * - features/    : Vertical slices (parsing → extraction → rewriting → assembly)
 * - config/      : Options builder, YAML files, naming templates
 * - pipeline/    : Orchestration
 */

//! ```
//! use schemaflat::{transform, TransformConfig};
//!
//! let source = r#"
//! export type Database = {
//!   public: {
//!     Tables: { users: { Row: { id: number } } }
//!     Enums: { mood: "happy" | "sad" }
//!   }
//! }
//! "#;
//!
//! let out = transform(source, TransformConfig::new().enum_formatter(|n| n.to_uppercase())).unwrap();
//! assert_eq!(
//!     out,
//!     "export type usersRow = { id: number };\n\nexport type MOOD = \"happy\" | \"sad\";\n"
//! );
//! ```

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (pipeline stages)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{OperationFlags, TransformConfig, ValidatedConfig};
pub use errors::{ErrorKind, Result, SchemaflatError};
pub use features::formatting::FormatterPolicy;
pub use pipeline::{transform, transform_with_report, TransformReport, Transformed};
