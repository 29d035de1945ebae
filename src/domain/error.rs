//! Domain errors

use std::fmt;

use thiserror::Error;

/// One broken rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
}

/// Entity validation failure.
///
/// Carries every violated `(field, rule)` pair, ordered by field name so the
/// rendered message is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        let mut error = Self::default();
        error.push(field, rule);
        error
    }

    pub fn push(&mut self, field: impl Into<String>, rule: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            rule: rule.into(),
        });
        self.violations.sort_by(|a, b| a.field.cmp(&b.field));
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether `field` has at least one violation
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "validation failed");
        }
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.rule))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, errs) in errors.field_errors() {
            for e in errs.iter() {
                let rule = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                out.push(field.to_string(), rule);
            }
        }
        out
    }
}

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(#[from] ValidationError),

    /// Store unavailable, constraint violation or I/O failure
    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
