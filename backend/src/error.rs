//! Error types for loading and transforming planting schedules.
//!
//! Only fatal conditions live here. An unparseable date is not an error: it
//! resolves to `None` and flows through the pipeline.

use std::fmt;
use std::path::PathBuf;

/// Result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Structured context for timeline errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_rows", "load_config")
    pub operation: Option<String>,
    /// File involved, if any
    pub path: Option<PathBuf>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref path) = self.path {
            parts.push(format!("path={}", path.display()));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for timeline operations
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// The input file could not be opened or read.
    #[error("I/O error: {source} {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: ErrorContext,
    },

    /// The delimited file is structurally broken (bad quoting, bad UTF-8, ...).
    #[error("CSV error: {source} {context}")]
    Csv {
        #[source]
        source: csv::Error,
        context: ErrorContext,
    },

    /// One or more required columns are absent from the header row.
    #[error("Missing required columns: {} {context}", .missing.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        context: ErrorContext,
    },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// A facet selection supplied by the caller is malformed.
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },
}

impl TimelineError {
    /// Create an I/O error with context.
    pub fn io(source: std::io::Error, context: ErrorContext) -> Self {
        Self::Io { source, context }
    }

    /// Create a CSV error with context.
    pub fn csv(source: csv::Error, context: ErrorContext) -> Self {
        Self::Csv { source, context }
    }

    /// Create a missing-columns error.
    pub fn missing_columns(missing: Vec<String>, context: ErrorContext) -> Self {
        Self::MissingColumns { missing, context }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error with context.
    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    /// Create an invalid-selection error.
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    /// Whether this error stems from the input file layout or the pipeline
    /// configuration rather than from the caller's request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingColumns { .. } | Self::ConfigurationError { .. }
        )
    }
}
