//! Error types for planet construction and serialization

use std::fmt;

use thiserror::Error;

/// Failure to build or serialize a [`Planet`](crate::Planet)
#[derive(Debug, Error)]
pub enum PlanetError {
    /// The name is not in the accepted set; carries the rejected input verbatim
    #[error("Invalid planet name: {0}")]
    InvalidName(String),

    /// One or more field constraints failed, or the payload could not be parsed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to serialize planet: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Offending field, or `None` when the payload as a whole is unreadable
    pub field: Option<&'static str>,
    pub message: String,
}

impl Violation {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn payload(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Every constraint violation found while building one record
///
/// Never empty: construction only produces one after finding a violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns `Ok(())` for an empty list, otherwise the aggregate error
    pub fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// Wraps a JSON parse failure (malformed text, missing or mistyped field)
    pub fn malformed(err: &serde_json::Error) -> Self {
        Self {
            violations: vec![Violation::payload(err.to_string())],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when some violation names `field`
    pub fn concerns(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == Some(field))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} validation error{} for Planet",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(
                f,
                "\n{}\n  {}",
                violation.field.unwrap_or("__root__"),
                violation.message
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
