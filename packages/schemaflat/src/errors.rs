//! Error types for schemaflat
//!
//! One error type for the whole pipeline. "Schema not found" is not an error:
//! it degrades to empty output and never reaches this module.

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed options, rejected before parsing starts
    Validation,
    /// Source text is not a well-formed TypeScript declaration file
    Parse,
    /// Configuration file could not be loaded
    Config,
    /// IO errors (CLI and config loading only)
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Parse => "parse",
            ErrorKind::Config => "config",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type
#[derive(Debug)]
pub struct SchemaflatError {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based position, parse errors only
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SchemaflatError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            column: None,
            source: None,
        }
    }

    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }
}

impl fmt::Display for SchemaflatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " at {}:{}", line, column)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaflatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for SchemaflatError {
    fn from(err: std::io::Error) -> Self {
        SchemaflatError::new(ErrorKind::Io, err.to_string()).with_source(err)
    }
}

impl From<crate::config::ConfigError> for SchemaflatError {
    fn from(err: crate::config::ConfigError) -> Self {
        match err {
            crate::config::ConfigError::Validation(msg) => SchemaflatError::validation(msg),
            other => SchemaflatError::config(other.to_string()).with_source(other),
        }
    }
}

/// Result type alias for schemaflat operations
pub type Result<T> = std::result::Result<T, SchemaflatError>;
