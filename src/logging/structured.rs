//! Structured logging utilities.
//!
//! Provides a context prefix (shape being decoded, and where the payload
//! came from) included in every boundary log message.

use std::fmt;

/// Logging context for one decode.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub shape: String,
    pub source: Option<String>,
}

impl LogContext {
    pub fn new(shape: &str) -> Self {
        Self {
            shape: shape.to_string(),
            source: None,
        }
    }

    pub fn with_source(&self, source: &str) -> Self {
        Self {
            shape: self.shape.clone(),
            source: Some(source.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "[shape={}] [source={}]", self.shape, src),
            None => write!(f, "[shape={}]", self.shape),
        }
    }
}
