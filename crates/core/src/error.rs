use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Field-level validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .0
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{}: {}", field, m)))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {}", details)
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Model output is missing required field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let mut errors = ValidationErrors::new();
        errors.add("idea_text", "Please enter a prompt idea.");

        let error = CoreError::from(errors);
        assert_eq!(
            error.to_string(),
            "Validation failed: idea_text: Please enter a prompt idea."
        );
    }

    #[test]
    fn test_empty_errors_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("idea_text", "too short");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "idea_text": ["too short"] }));
    }
}
